//! Agent profile screen: hero card, contact actions, experience stats,
//! and branch details.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::content::{
    self, AGENT_PROFILE_MENU, AGENT_STATS, BRANCH_DETAILS, Language,
};

use super::{blank, dim, menu_lines, section};

pub fn lines(language: Language, cursor: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                content::AGENT_NAME.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ✓", Style::default().fg(Color::Green)),
        ]),
        dim("Bank of Baroda Mini Branch Agent"),
        dim("🤝 Trusted Banking Partner"),
        blank(),
    ];

    lines.extend(menu_lines(
        AGENT_PROFILE_MENU,
        0..AGENT_PROFILE_MENU.len(),
        language,
        cursor,
    ));
    lines.push(blank());

    let stats = AGENT_STATS
        .iter()
        .map(|s| format!("{} {}: {}", s.icon, s.label, s.value))
        .collect::<Vec<_>>()
        .join("   ");
    lines.push(Line::from(Span::raw(stats)));
    lines.push(blank());

    lines.push(section("Branch Details".to_string()));
    for detail in BRANCH_DETAILS {
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", detail.icon)),
            Span::styled(
                format!("{}: ", detail.label),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(detail.value.to_string()),
        ]));
    }
    lines
}
