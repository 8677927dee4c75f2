//! Settings screen: language selection (the one live control), plus the
//! display-only notification and security sections.

use ratatui::text::Line;

use crate::core::content::{Label, Language, SETTINGS_MENU};

use super::{blank, dim, menu_lines, section};

pub fn lines(language: Language, cursor: usize) -> Vec<Line<'static>> {
    let mut lines = vec![section(
        Label::new("Language", "ಭಾಷೆ").display(language),
    )];
    lines.push(dim(format!("Current: {}", language.label())));
    lines.extend(menu_lines(SETTINGS_MENU, 0..1, language, cursor));
    lines.push(blank());

    lines.push(section("Notifications".to_string()));
    lines.extend(menu_lines(SETTINGS_MENU, 1..4, language, cursor));
    lines.push(blank());

    lines.push(section("Security".to_string()));
    lines.extend(menu_lines(SETTINGS_MENU, 4..SETTINGS_MENU.len(), language, cursor));
    lines.push(blank());

    lines.push(section("Secure Banking".to_string()));
    lines.push(dim(
        "Always log out after use and never share your OTP or MPIN with anyone.",
    ));
    lines
}
