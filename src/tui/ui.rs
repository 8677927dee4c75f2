//! Top-level frame composition: header, scrollable screen body, the
//! bottom navigation bar on the four tab screens, and the status line.
//!
//! The bottom nav is composed here, not inside the screens, so the
//! visibility rule lives in exactly one place:
//! `app.screen().shows_bottom_nav()`.

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{BottomNav, Header, screens};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::text::{Span, Text};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollbarVisibility};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let screen = app.screen();
    let show_nav = screen.shows_bottom_nav();

    let nav_height = if show_nav { 2 } else { 0 };
    let layout = Layout::vertical([Length(2), Min(0), Length(nav_height), Length(1)]);
    let [header_area, body_area, nav_area, status_area] = layout.areas(frame.area());

    Header::new(screen, app.language).render(frame, header_area);
    draw_body(frame, body_area, app, tui);
    if show_nav {
        BottomNav::new(screen).render(frame, nav_area);
    }
    draw_status(frame, status_area, app);
}

fn draw_body(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let lines = screens::body_lines(app, tui);
    let content_width = area.width.saturating_sub(1);
    let total_height = lines.len() as u16;

    let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
        .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
        .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

    let content_rect = Rect::new(0, 0, content_width, total_height);
    scroll_view.render_widget(Paragraph::new(Text::from(lines)), content_rect);

    frame.render_stateful_widget(scroll_view, area, &mut tui.scroll);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let text = if app.status_message.is_empty() {
        hint_for(app).to_string()
    } else {
        app.status_message.clone()
    };
    frame.render_widget(
        Span::styled(text, Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn hint_for(app: &App) -> &'static str {
    use crate::core::screen::ScreenId;
    match app.screen() {
        ScreenId::Upload => "Tab: switch field · Enter: raise application · Esc: back · Ctrl+C: quit",
        s if s.shows_bottom_nav() => "↑↓ select · Enter: open · 1-4: tabs · Ctrl+L: language · q: quit",
        _ => "↑↓ select · Enter: open · Esc: back · Ctrl+L: language · q: quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::Language;
    use crate::core::screen::ScreenId;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_screen(screen: ScreenId) -> String {
        let app = App::new(screen, Language::Bilingual);
        let mut tui = TuiState::new();
        let backend = TestBackend::new(100, 32);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_every_screen_draws() {
        for screen in ScreenId::ALL {
            let text = render_screen(screen);
            assert!(!text.trim().is_empty(), "{screen:?} drew nothing");
        }
    }

    #[test]
    fn test_bottom_nav_only_on_the_four_tab_screens() {
        for screen in ScreenId::ALL {
            let text = render_screen(screen);
            let has_nav = text.contains("[2] Services") && text.contains("[4] Profile");
            assert_eq!(has_nav, screen.shows_bottom_nav(), "{screen:?}");
        }
    }

    #[test]
    fn test_initial_render_is_home_with_nav() {
        let text = render_screen(ScreenId::Home);
        assert!(text.contains("Bank of Baroda"));
        assert!(text.contains("[1] Home"));
    }

    #[test]
    fn test_status_message_replaces_hints() {
        let mut app = App::default();
        app.status_message = String::from("Calling 63616 39923");
        let mut tui = TuiState::new();
        let backend = TestBackend::new(100, 32);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Calling 63616 39923"));
        assert!(!text.contains("q: quit"));
    }

    #[test]
    fn test_upload_hint_mentions_form_keys() {
        let text = render_screen(ScreenId::Upload);
        assert!(text.contains("Tab: switch field"));
        assert!(!text.contains("[1] Home"));
    }
}
