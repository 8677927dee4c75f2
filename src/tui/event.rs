use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseEventKind};

/// TUI-specific input events.
///
/// Translation here is context-free: the event loop decides what a key
/// means on the current screen (e.g. printable chars feed the upload form
/// on the upload screen and act as shortcuts everywhere else).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// Ctrl+C — quits regardless of screen.
    ForceQuit,
    /// Esc or the back key — the screen's back action.
    Back,
    /// Enter — activate the selected item / submit the form.
    Submit,
    CursorUp,
    CursorDown,
    ScrollPageUp,
    ScrollPageDown,
    /// Tab — next form field on the upload screen.
    NextField,
    InputChar(char),
    Backspace,
    /// Ctrl+L — cycle label language.
    CycleLanguage,
    Resize,
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap_or(false) {
        translate(event::read().ok()?)
    } else {
        None
    }
}

/// Poll for an event without blocking (returns immediately).
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (KeyModifiers::CONTROL, KeyCode::Char('l')) => Some(TuiEvent::CycleLanguage),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Back),
                (_, KeyCode::Tab) => Some(TuiEvent::NextField),
                (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
                (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::CursorUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::CursorDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
