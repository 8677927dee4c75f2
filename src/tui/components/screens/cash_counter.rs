//! Cash counter screen: cash-in-hand card with the active-session pulse,
//! quick actions, and the daily summary.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::content::{
    ACTIVE_SESSION_LABEL, CASH_COUNTER_MENU, CASH_IN_HAND, CASH_IN_HAND_LABEL, DAILY_SUMMARY,
    Label, Language, Tone,
};

use super::{blank, dim, menu_lines, section};

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Credit => Color::Green,
        Tone::Debit => Color::Red,
        Tone::Net => Color::Yellow,
    }
}

pub fn lines(language: Language, cursor: usize, pulse_on: bool) -> Vec<Line<'static>> {
    let session_dot = if pulse_on { "●" } else { "○" };
    let mut lines = vec![
        dim(CASH_IN_HAND_LABEL.display(language)),
        Line::from(Span::styled(
            CASH_IN_HAND.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!("{session_dot} "), Style::default().fg(Color::Green)),
            Span::raw(ACTIVE_SESSION_LABEL.display(language)),
        ]),
        blank(),
        section(Label::new("Quick Actions", "ತ್ವರಿತ ಕ್ರಿಯೆಗಳು").display(language)),
    ];

    lines.extend(menu_lines(
        CASH_COUNTER_MENU,
        0..CASH_COUNTER_MENU.len(),
        language,
        cursor,
    ));
    lines.push(blank());

    lines.push(section(
        Label::new("Daily Summary", "ದೈನಂದಿನ ಸಾರಾಂಶ").display(language),
    ));
    for row in DAILY_SUMMARY {
        lines.push(Line::from(vec![
            Span::raw(format!("{} {}: ", row.icon, row.label.display(language))),
            Span::styled(
                row.amount.to_string(),
                Style::default()
                    .fg(tone_color(row.tone))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    lines
}
