//! Upload screen: customer details form plus the document drop hint.
//! Field state lives in `components::upload_form`; this module only draws
//! it. Submission navigates to the history screen.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::content::{Label, Language};
use crate::tui::components::upload_form::{FormField, UploadForm};

use super::{blank, dim, section};

fn field_line(value: &str, placeholder: &str, focused: bool) -> Line<'static> {
    let marker = if focused { "▸ " } else { "  " };
    let mut spans = vec![Span::styled(
        marker.to_string(),
        Style::default().fg(Color::Yellow),
    )];
    if value.is_empty() {
        spans.push(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::raw(value.to_string()));
    }
    if focused {
        spans.push(Span::styled(
            "▏",
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    Line::from(spans)
}

pub fn lines(language: Language, form: &UploadForm) -> Vec<Line<'static>> {
    let mut lines = vec![
        section(Label::new("Customer Details", "ಗ್ರಾಹಕರ ವಿವರಗಳು").display(language)),
        dim(Label::new("Customer Name", "ಗ್ರಾಹಕರ ಹೆಸರು").display(language)),
        field_line(
            &form.name,
            &Label::new("Enter full name", "ಪೂರ್ಣ ಹೆಸರನ್ನು ನಮೂದಿಸಿ").display(language),
            form.focus == FormField::Name,
        ),
        dim(Label::new("Phone Number", "ಫೋನ್ ಸಂಖ್ಯೆ").display(language)),
        field_line(
            &form.phone,
            "10-digit mobile number",
            form.focus == FormField::Phone,
        ),
        blank(),
        section(Label::new("Upload Document", "ದಾಖಲೆ ಅಪ್\u{200c}ಲೋಡ್").display(language)),
        dim("PDF, JPG or PNG (Max 5MB)"),
        dim(Label::new(
            "Click to upload or drag and drop",
            "ಚಿತ್ರ ಅಥವಾ PDF ಆಯ್ಕೆ ಮಾಡಲು ಇಲ್ಲಿ ಕ್ಲಿಕ್ ಮಾಡಿ",
        )
        .display(language)),
        blank(),
    ];

    lines.push(Line::from(Span::styled(
        format!(
            "[ Enter: {} ]",
            Label::new("Raise Application", "ಅರ್ಜಿ ಸಲ್ಲಿಸಿ").display(language)
        ),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(dim(
        "By clicking submit, you agree to our terms and conditions.",
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::component::EventHandler;
    use crate::tui::event::TuiEvent;

    fn text(language: Language, form: &UploadForm) -> String {
        lines(language, form)
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_empty_form_shows_placeholders() {
        let form = UploadForm::new();
        let body = text(Language::English, &form);
        assert!(body.contains("Enter full name"));
        assert!(body.contains("10-digit mobile number"));
        assert!(body.contains("Raise Application"));
    }

    #[test]
    fn test_typed_values_replace_placeholders() {
        let mut form = UploadForm::new();
        for c in "Sandeep".chars() {
            form.handle_event(&TuiEvent::InputChar(c));
        }
        let body = text(Language::English, &form);
        assert!(body.contains("Sandeep"));
        assert!(!body.contains("Enter full name"));
    }

    #[test]
    fn test_focus_marker_moves_with_tab() {
        let mut form = UploadForm::new();
        form.handle_event(&TuiEvent::NextField);
        let body = text(Language::English, &form);
        // The phone row carries the marker now.
        let marked: Vec<&str> = body.lines().filter(|l| l.starts_with('▸')).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("10-digit"));
    }
}
