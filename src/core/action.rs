//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`.
//! User presses `2` on the bottom nav? That's `Action::SetScreen(Services)`.
//! User picks "Call Now"? That's `Action::OpenExternal(Call(..))`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any outside work the
//! caller should do. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  State' + Effect
//! ```
//!
//! Every action completes synchronously within one input event; there is
//! no intermediate "navigating" state and nothing to cancel.

use crate::core::content::{ExternalLink, Language};
use crate::core::screen::ScreenId;
use crate::core::state::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Replace the current screen. Unconditional; idempotent when the
    /// target is already current.
    SetScreen(ScreenId),
    /// Go to the current screen's fixed back target. No-op on Home.
    Back,
    /// Rotate the label language mode.
    CycleLanguage,
    /// Fire-and-forget platform action. Never changes navigation state.
    OpenExternal(ExternalLink),
    Quit,
}

/// Outside work requested by `update()`. The event loop owns all I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    OpenExternal(ExternalLink),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SetScreen(target) => {
            // Redundant transitions leave all observable state untouched.
            if target != app.screen() {
                app.navigator.transition_to(target);
                app.status_message.clear();
            }
            Effect::None
        }
        Action::Back => {
            if let Some(target) = app.screen().back_target() {
                app.navigator.transition_to(target);
                app.status_message.clear();
            }
            Effect::None
        }
        Action::CycleLanguage => {
            app.language = app.language.next();
            app.status_message = format!("Language: {}", app.language.label());
            Effect::None
        }
        Action::OpenExternal(link) => {
            app.status_message = link.describe();
            Effect::OpenExternal(link)
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_screen_tracks_last_value() {
        let mut app = App::default();
        for target in [
            ScreenId::Services,
            ScreenId::Upload,
            ScreenId::History,
            ScreenId::Home,
            ScreenId::CashCounter,
        ] {
            assert_eq!(update(&mut app, Action::SetScreen(target)), Effect::None);
            assert_eq!(app.screen(), target);
        }
    }

    #[test]
    fn test_set_screen_is_idempotent() {
        let mut app = App::default();
        update(&mut app, Action::SetScreen(ScreenId::Services));
        let language = app.language;
        let status = app.status_message.clone();
        update(&mut app, Action::SetScreen(ScreenId::Services));
        assert_eq!(app.screen(), ScreenId::Services);
        assert_eq!(app.language, language);
        assert_eq!(app.status_message, status);
    }

    #[test]
    fn test_redundant_set_screen_keeps_status_message() {
        // l on home sets a status; 1 re-selects the current tab. The
        // status line must survive the redundant transition.
        let mut app = App::default();
        update(&mut app, Action::CycleLanguage);
        let status = app.status_message.clone();
        assert!(!status.is_empty());
        update(&mut app, Action::SetScreen(ScreenId::Home));
        assert_eq!(app.screen(), ScreenId::Home);
        assert_eq!(app.status_message, status);

        // A real transition still clears it.
        update(&mut app, Action::SetScreen(ScreenId::Services));
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_back_follows_fixed_targets() {
        let mut app = App::default();
        update(&mut app, Action::SetScreen(ScreenId::Settings));
        update(&mut app, Action::Back);
        assert_eq!(app.screen(), ScreenId::Profile);
        update(&mut app, Action::Back);
        assert_eq!(app.screen(), ScreenId::Home);
    }

    #[test]
    fn test_back_on_home_is_noop() {
        let mut app = App::default();
        assert_eq!(update(&mut app, Action::Back), Effect::None);
        assert_eq!(app.screen(), ScreenId::Home);
    }

    #[test]
    fn test_agent_card_round_trip() {
        // Home → agent profile via the agent card, then back to home.
        let mut app = App::default();
        update(&mut app, Action::SetScreen(ScreenId::AgentProfile));
        assert!(!app.screen().shows_bottom_nav());
        update(&mut app, Action::Back);
        assert_eq!(app.screen(), ScreenId::Home);
    }

    #[test]
    fn test_cycle_language_updates_status() {
        let mut app = App::default();
        update(&mut app, Action::CycleLanguage);
        assert_eq!(app.language, Language::English);
        assert_eq!(app.status_message, "Language: English");
    }

    #[test]
    fn test_open_external_leaves_navigation_alone() {
        let mut app = App::default();
        update(&mut app, Action::SetScreen(ScreenId::AgentProfile));
        let link = ExternalLink::Call("63616 39923");
        let effect = update(&mut app, Action::OpenExternal(link));
        assert_eq!(effect, Effect::OpenExternal(link));
        assert_eq!(app.screen(), ScreenId::AgentProfile);
        assert_eq!(app.status_message, "Calling 63616 39923");
    }

    #[test]
    fn test_quit_effect() {
        let mut app = App::default();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
