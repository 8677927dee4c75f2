//! Services screen: the six-entry service catalogue. Activating any entry
//! proceeds to document upload for that service.

use ratatui::text::Line;

use crate::core::content::{Language, SERVICES_MENU};

use super::{blank, dim, item_line};

pub fn lines(language: Language, cursor: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        dim("Choose a service to proceed with documentation"),
        blank(),
    ];
    for (index, item) in SERVICES_MENU.iter().enumerate() {
        lines.push(item_line(item, language, cursor == index));
    }
    lines.push(blank());
    lines.push(dim("Enter: upload documents for the selected service"));
    lines
}
