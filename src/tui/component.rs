use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components follow a props pattern: they receive data via struct fields
/// and render into a `Frame` within a given `Rect`. Stateless components
/// (header, bottom nav) are pure functions of their props; the upload form
/// additionally owns its field buffers.
///
/// `render` takes `&mut self` to align with Ratatui's `StatefulWidget`
/// pattern and allow components to update presentation caches.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
