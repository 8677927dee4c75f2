//! # BottomNav Component
//!
//! Persistent 4-destination tab bar shown on home, services, history and
//! profile. Stateless: it receives the current screen as a prop and all
//! state changes go through the navigation setter in the event loop (keys
//! `1`–`4`).
//!
//! Exactly one tab renders in the active style, always the one matching
//! the current screen; the bar is only composed on screens that are
//! themselves tabs, so there is no "no active tab" rendering state.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::screen::{NAV_TABS, ScreenId};
use crate::tui::component::Component;

struct NavTab {
    id: ScreenId,
    icon: &'static str,
    label: &'static str,
}

/// Fixed order, matching the original bar: home, services, history, profile.
const TABS: [NavTab; 4] = [
    NavTab { id: ScreenId::Home, icon: "⌂", label: "Home" },
    NavTab { id: ScreenId::Services, icon: "▦", label: "Services" },
    NavTab { id: ScreenId::History, icon: "↻", label: "History" },
    NavTab { id: ScreenId::Profile, icon: "☺", label: "Profile" },
];

pub struct BottomNav {
    pub current: ScreenId,
}

impl BottomNav {
    pub fn new(current: ScreenId) -> Self {
        Self { current }
    }
}

impl Component for BottomNav {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

        for (index, tab) in TABS.iter().enumerate() {
            let active = tab.id == self.current;
            let style = if active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let text = format!("{} [{}] {}", tab.icon, index + 1, tab.label);
            // Center by display width; icons and Kannada glyphs are wide.
            let pad = columns[index]
                .width
                .saturating_sub(text.width() as u16)
                / 2;
            let line = Line::from(vec![
                Span::raw(" ".repeat(pad as usize)),
                Span::styled(text, style),
            ]);

            let cell = Paragraph::new(line).block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
            frame.render_widget(cell, columns[index]);
        }
    }
}
