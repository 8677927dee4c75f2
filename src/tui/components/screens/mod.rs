//! # Screen Bodies
//!
//! One module per screen. Each exposes a `lines()` function producing the
//! screen's content as styled text; the scroll view and chrome around it
//! live in `tui::ui`. Screens are replaceable content: the core only knows
//! them through their `ScreenId` and their menu in `core::content`.

pub mod agent_profile;
pub mod cash_counter;
pub mod history;
pub mod home;
pub mod profile;
pub mod services;
pub mod settings;
pub mod upload;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::content::{Language, MenuItem};
use crate::core::screen::ScreenId;
use crate::core::state::App;
use crate::tui::TuiState;

/// Select and build the body for the current screen. The match is total
/// over `ScreenId`: a new screen does not compile until it renders.
pub fn body_lines(app: &App, tui: &TuiState) -> Vec<Line<'static>> {
    let language = app.language;
    match app.screen() {
        ScreenId::Home => home::lines(language, tui.cursor),
        ScreenId::Services => services::lines(language, tui.cursor),
        ScreenId::Upload => upload::lines(language, &tui.upload_form),
        ScreenId::History => history::lines(language, tui.pulse_on()),
        ScreenId::Profile => profile::lines(language, tui.cursor),
        ScreenId::AgentProfile => agent_profile::lines(language, tui.cursor),
        ScreenId::Settings => settings::lines(language, tui.cursor),
        ScreenId::CashCounter => cash_counter::lines(language, tui.cursor, tui.pulse_on()),
    }
}

/// One interactive row. `selected` renders the cursor marker and the
/// active style.
pub(crate) fn item_line(item: &MenuItem, language: Language, selected: bool) -> Line<'static> {
    let marker = if selected { "▸ " } else { "  " };
    let label_style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::styled(marker.to_string(), label_style),
        Span::raw(format!("{} ", item.icon)),
        Span::styled(item.label.display(language), label_style),
    ];
    if !item.detail.en.is_empty() {
        spans.push(Span::styled(
            format!("  — {}", item.detail.display(language)),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Render a contiguous run of a screen's menu, keeping cursor indices
/// aligned with `core::content::menu_for`.
pub(crate) fn menu_lines(
    items: &[MenuItem],
    range: std::ops::Range<usize>,
    language: Language,
    cursor: usize,
) -> Vec<Line<'static>> {
    range
        .map(|index| item_line(&items[index], language, cursor == index))
        .collect()
}

pub(crate) fn section(text: String) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

pub(crate) fn dim(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default().fg(Color::DarkGray),
    ))
}

pub(crate) fn blank() -> Line<'static> {
    Line::from("")
}
