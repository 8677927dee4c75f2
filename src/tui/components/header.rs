//! # Header Component
//!
//! Two-line screen header: bilingual title on top, context line below.
//! Mirrors the original screens' sticky headers — the home header carries
//! the brand, inner screens carry the agent byline and a back hint.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::content::{self, Language};
use crate::core::screen::ScreenId;
use crate::tui::component::Component;

pub struct Header {
    pub screen: ScreenId,
    pub language: Language,
}

impl Header {
    pub fn new(screen: ScreenId, language: Language) -> Self {
        Self { screen, language }
    }

    fn context_line(&self) -> String {
        let byline = match self.screen {
            ScreenId::Home => content::BANK_TAGLINE.to_string(),
            ScreenId::Services | ScreenId::Settings => {
                format!("{} · BC Banking Partner", content::AGENT_NAME)
            }
            ScreenId::Upload => {
                content::Label::new("Banking Services", "ಬ್ಯಾಂಕಿಂಗ್ ಸೇವೆಗಳು").display(self.language)
            }
            _ => content::BANK_NAME.to_string(),
        };
        if self.screen.back_target().is_some() {
            format!("‹ Esc back · {byline}")
        } else {
            byline
        }
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = content::screen_title(self.screen).display(self.language);
        let lines = vec![
            Line::from(Span::styled(
                title,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.context_line(),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(screen: ScreenId, language: Language) -> String {
        let backend = TestBackend::new(80, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| Header::new(screen, language).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_home_header_carries_brand() {
        let text = render_to_text(ScreenId::Home, Language::Bilingual);
        assert!(text.contains("Bank of Baroda"));
        assert!(text.contains("Mini Branch"));
        assert!(!text.contains("Esc back"));
    }

    #[test]
    fn test_inner_screen_shows_back_hint() {
        let text = render_to_text(ScreenId::Settings, Language::English);
        assert!(text.contains("Settings"));
        assert!(text.contains("Esc back"));
    }

    #[test]
    fn test_title_respects_language() {
        let english = render_to_text(ScreenId::History, Language::English);
        assert!(english.contains("Status & History"));
        assert!(!english.contains("ಸ್ಥಿತಿ"));

        let kannada = render_to_text(ScreenId::History, Language::Kannada);
        assert!(kannada.contains("ಸ್ಥಿತಿ"));
    }
}
