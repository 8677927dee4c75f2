//! User profile screen: personal details, linked account, and the
//! settings entry point.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::content::{
    self, CUSTOMER_ID, CUSTOMER_NAME, LINKED_ACCOUNT, Language, PROFILE_FIELDS, PROFILE_MENU,
};

use super::{blank, dim, menu_lines, section};

pub fn lines(language: Language, cursor: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            CUSTOMER_NAME.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        dim(CUSTOMER_ID),
        blank(),
        section("Personal Details".to_string()),
    ];

    for field in PROFILE_FIELDS {
        let mut spans = vec![
            Span::styled(
                format!("{}: ", field.label),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(field.value.to_string()),
        ];
        if field.verified {
            spans.push(Span::styled(" ✓", Style::default().fg(Color::Green)));
        }
        if !field.value_kn.is_empty() && language != Language::English {
            spans.push(Span::styled(
                format!("  {}", field.value_kn),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(blank());
    lines.push(section("Linked Accounts".to_string()));
    lines.push(Line::from(vec![
        Span::raw(format!("{} {}  ", LINKED_ACCOUNT.icon, LINKED_ACCOUNT.label)),
        Span::styled(
            LINKED_ACCOUNT.value.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(dim("PRIMARY"));
    lines.push(blank());

    lines.extend(menu_lines(PROFILE_MENU, 0..PROFILE_MENU.len(), language, cursor));
    lines
}
