//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm; the
//! core is renderer-agnostic.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (pulse indicators on the history and cash-counter
//!   screens): draws every ~80ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! Animation is cosmetic only — it never delays a state change and no
//! input waits on it. Every action runs to completion before the next
//! event is read, so the single navigation variable has one writer and
//! no concurrent access.

mod component;
pub mod components;
pub mod event;
pub mod ui;

pub use component::{Component, EventHandler};

use log::info;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::content::{Activation, Label, menu_for};
use crate::core::screen::{NAV_TABS, ScreenId};
use crate::core::state::App;
use crate::tui::components::{FormEvent, UploadForm};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic).
pub struct TuiState {
    /// Index into the current screen's menu.
    pub cursor: usize,
    /// Body scroll offset for the current screen.
    pub scroll: tui_scrollview::ScrollViewState,
    /// Field buffers for the upload screen.
    pub upload_form: UploadForm,
    /// Animation phase in [0, 1] for the pulse indicators.
    pub pulse_value: f32,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            scroll: tui_scrollview::ScrollViewState::default(),
            upload_form: UploadForm::new(),
            pulse_value: 0.0,
        }
    }

    /// Cursor and scroll start fresh on every screen transition.
    pub fn reset_for_screen(&mut self) {
        self.cursor = 0;
        self.scroll = tui_scrollview::ScrollViewState::default();
    }

    pub fn pulse_on(&self) -> bool {
        self.pulse_value > 0.5
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply an action, reset presentation state if the screen changed, and
/// carry out the returned effect. Returns true when the app should quit.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action) -> bool {
    let before = app.screen();
    let effect = update(app, action);
    if app.screen() != before {
        tui.reset_for_screen();
    }
    match effect {
        Effect::Quit => true,
        Effect::OpenExternal(link) => {
            // Fire-and-forget: hand off to the platform and move on.
            info!("External action: {}", link.describe());
            false
        }
        Effect::None => false,
    }
}

/// Activate the currently selected menu item, if any.
fn activate_selection(app: &mut App, tui: &mut TuiState) -> bool {
    let menu = menu_for(app.screen());
    let Some(item) = menu.get(tui.cursor) else {
        return false;
    };
    match item.activation {
        Activation::Goto(target) => dispatch(app, tui, Action::SetScreen(target)),
        Activation::External(link) => dispatch(app, tui, Action::OpenExternal(link)),
        Activation::CycleLanguage => dispatch(app, tui, Action::CycleLanguage),
        Activation::None => false,
    }
}

/// Keys outside the upload form act as shortcuts. Returns true when the
/// app should quit.
fn handle_shortcut(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> bool {
    match event {
        TuiEvent::Back | TuiEvent::Backspace => dispatch(app, tui, Action::Back),
        TuiEvent::Submit => activate_selection(app, tui),
        TuiEvent::CursorUp => {
            tui.cursor = tui.cursor.saturating_sub(1);
            tui.scroll.scroll_up();
            false
        }
        TuiEvent::CursorDown => {
            let menu_len = menu_for(app.screen()).len();
            if tui.cursor + 1 < menu_len {
                tui.cursor += 1;
            }
            tui.scroll.scroll_down();
            false
        }
        TuiEvent::InputChar('q') => dispatch(app, tui, Action::Quit),
        TuiEvent::InputChar('l') => dispatch(app, tui, Action::CycleLanguage),
        TuiEvent::InputChar(c @ '1'..='4') if app.screen().shows_bottom_nav() => {
            let index = (c as usize) - ('1' as usize);
            dispatch(app, tui, Action::SetScreen(NAV_TABS[index]))
        }
        _ => false,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Pulse indicators only exist on these two screens.
        let animating = matches!(app.screen(), ScreenId::History | ScreenId::CashCounter);
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            tui.pulse_value = (elapsed * 5.0).sin() * 0.5 + 0.5;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating, long when idle.
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain all pending events before next draw.
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of screen
            if matches!(event, TuiEvent::ForceQuit) {
                should_quit |= dispatch(&mut app, &mut tui, Action::Quit);
                continue;
            }

            if matches!(event, TuiEvent::CycleLanguage) {
                should_quit |= dispatch(&mut app, &mut tui, Action::CycleLanguage);
                continue;
            }

            // Page scrolling works on every screen
            match event {
                TuiEvent::ScrollPageUp => {
                    tui.scroll.scroll_page_up();
                    continue;
                }
                TuiEvent::ScrollPageDown => {
                    tui.scroll.scroll_page_down();
                    continue;
                }
                _ => {}
            }

            // Modal dispatch: the upload screen owns printable characters,
            // Tab and Enter; everywhere else they are shortcuts.
            if app.screen() == ScreenId::Upload {
                if matches!(event, TuiEvent::Back) {
                    should_quit |= dispatch(&mut app, &mut tui, Action::Back);
                    continue;
                }
                if let Some(FormEvent::Submitted) = tui.upload_form.handle_event(&event) {
                    info!(
                        "Application raised (name={:?}, phone={:?})",
                        tui.upload_form.name, tui.upload_form.phone
                    );
                    tui.upload_form.clear();
                    should_quit |=
                        dispatch(&mut app, &mut tui, Action::SetScreen(ScreenId::History));
                    app.status_message = Label::new("Application raised", "ಅರ್ಜಿ ಸಲ್ಲಿಸಲಾಗಿದೆ")
                        .display(app.language);
                }
                continue;
            }

            should_quit |= handle_shortcut(&mut app, &mut tui, event);
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}
