//! Home screen: branch hero card, agent card, quick support, and the
//! service shortcut grid. Every shortcut leads into the services screen;
//! the agent card opens the agent profile.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::content::{self, HOME_MENU, Label, Language};

use super::{blank, dim, menu_lines, section};

pub fn lines(language: Language, cursor: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Branch hero + agent card (menu item 0).
    lines.extend(menu_lines(HOME_MENU, 0..1, language, cursor));
    lines.push(Line::from(vec![
        Span::raw("    "),
        Span::styled(
            content::AGENT_NAME.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" · {}", content::AGENT_ROLE),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    lines.push(dim(format!("    {}", content::AGENT_ADDRESS)));
    lines.push(blank());

    lines.push(section(
        Label::new("Quick Support", "ಸಂಪರ್ಕಿಸಿ").display(language),
    ));
    lines.extend(menu_lines(HOME_MENU, 1..4, language, cursor));
    lines.push(blank());

    lines.push(section(
        Label::new("Banking Services", "ಬ್ಯಾಂಕಿಂಗ್ ಸೇವೆಗಳು").display(language),
    ));
    lines.push(dim("Basic banking operations and account management"));
    lines.extend(menu_lines(HOME_MENU, 4..10, language, cursor));
    lines.push(blank());

    lines.push(section(
        Label::new("Loan Services", "ಸಾಲದ ಸೇವೆಗಳು").display(language),
    ));
    lines.push(dim("Apply for various loan schemes"));
    lines.extend(menu_lines(HOME_MENU, 10..HOME_MENU.len(), language, cursor));

    lines
}
