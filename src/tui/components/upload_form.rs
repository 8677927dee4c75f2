//! # Upload Form
//!
//! Field state for the document-upload screen: customer name and phone
//! number, with Tab switching focus. The phone field only accepts digits
//! and caps at ten, matching the "10-digit mobile number" hint on the
//! original form. Rendering lives in `screens::upload`; this type owns the
//! buffers and the event handling.

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

pub const PHONE_MAX_DIGITS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Phone,
}

/// High-level event emitted by the form.
#[derive(Debug, PartialEq, Eq)]
pub enum FormEvent {
    /// "Raise Application" — the caller navigates to the history screen.
    Submitted,
}

#[derive(Debug, Default)]
pub struct UploadForm {
    pub name: String,
    pub phone: String,
    pub focus: FormField,
}

impl Default for FormField {
    fn default() -> Self {
        FormField::Name
    }
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.focus = FormField::Name;
    }

    fn insert(&mut self, c: char) {
        match self.focus {
            FormField::Name => {
                if !c.is_control() {
                    self.name.push(c);
                }
            }
            FormField::Phone => {
                if c.is_ascii_digit() && self.phone.len() < PHONE_MAX_DIGITS {
                    self.phone.push(c);
                }
            }
        }
    }

    fn backspace(&mut self) {
        match self.focus {
            FormField::Name => {
                self.name.pop();
            }
            FormField::Phone => {
                self.phone.pop();
            }
        }
    }
}

impl EventHandler for UploadForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.insert(*c);
                None
            }
            TuiEvent::Backspace => {
                self.backspace();
                None
            }
            TuiEvent::NextField => {
                self.focus = match self.focus {
                    FormField::Name => FormField::Phone,
                    FormField::Phone => FormField::Name,
                };
                None
            }
            TuiEvent::Submit => Some(FormEvent::Submitted),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(form: &mut UploadForm, text: &str) {
        for c in text.chars() {
            form.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_name_field_accepts_text() {
        let mut form = UploadForm::new();
        type_str(&mut form, "Sandeep Kumar");
        assert_eq!(form.name, "Sandeep Kumar");
        assert!(form.phone.is_empty());
    }

    #[test]
    fn test_tab_switches_focus_both_ways() {
        let mut form = UploadForm::new();
        assert_eq!(form.focus, FormField::Name);
        form.handle_event(&TuiEvent::NextField);
        assert_eq!(form.focus, FormField::Phone);
        form.handle_event(&TuiEvent::NextField);
        assert_eq!(form.focus, FormField::Name);
    }

    #[test]
    fn test_phone_field_filters_non_digits() {
        let mut form = UploadForm::new();
        form.handle_event(&TuiEvent::NextField);
        type_str(&mut form, "63a61-63 9923");
        assert_eq!(form.phone, "6361639923");
    }

    #[test]
    fn test_phone_field_caps_at_ten_digits() {
        let mut form = UploadForm::new();
        form.handle_event(&TuiEvent::NextField);
        type_str(&mut form, "123456789012345");
        assert_eq!(form.phone, "1234567890");
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let mut form = UploadForm::new();
        type_str(&mut form, "Ravi");
        form.handle_event(&TuiEvent::Backspace);
        assert_eq!(form.name, "Rav");

        form.handle_event(&TuiEvent::NextField);
        type_str(&mut form, "42");
        form.handle_event(&TuiEvent::Backspace);
        assert_eq!(form.phone, "4");
        assert_eq!(form.name, "Rav");
    }

    #[test]
    fn test_submit_emits_event() {
        let mut form = UploadForm::new();
        assert_eq!(
            form.handle_event(&TuiEvent::Submit),
            Some(FormEvent::Submitted)
        );
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut form = UploadForm::new();
        type_str(&mut form, "Ravi");
        form.handle_event(&TuiEvent::NextField);
        type_str(&mut form, "99");
        form.clear();
        assert!(form.name.is_empty());
        assert!(form.phone.is_empty());
        assert_eq!(form.focus, FormField::Name);
    }
}
