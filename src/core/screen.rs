//! # Screens
//!
//! The closed set of navigable screens and the navigation state that
//! selects between them.
//!
//! ```text
//! home ──┬── services ── upload
//!        ├── history
//!        ├── profile ── settings
//!        ├── agent-profile
//!        └── cash-counter
//! ```
//!
//! The tree above shows the back edges only. Forward navigation is
//! unrestricted: any screen's content may request any other screen.
//! `Navigator` is the single writer of the current-screen value.

use clap::ValueEnum;

/// One of the eight navigable screens. Closed set, known at build time.
///
/// Wire names (CLI flags, config file, env vars) are kebab-case:
/// `home`, `services`, `upload`, `history`, `profile`, `agent-profile`,
/// `settings`, `cash-counter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum ScreenId {
    #[default]
    Home,
    Services,
    Upload,
    History,
    Profile,
    AgentProfile,
    Settings,
    CashCounter,
}

/// The four destinations shown in the bottom navigation bar, in display order.
pub const NAV_TABS: [ScreenId; 4] = [
    ScreenId::Home,
    ScreenId::Services,
    ScreenId::History,
    ScreenId::Profile,
];

impl ScreenId {
    /// All screens, in a stable order. Handy for exhaustive render tests.
    pub const ALL: [ScreenId; 8] = [
        ScreenId::Home,
        ScreenId::Services,
        ScreenId::Upload,
        ScreenId::History,
        ScreenId::Profile,
        ScreenId::AgentProfile,
        ScreenId::Settings,
        ScreenId::CashCounter,
    ];

    /// Kebab-case wire name, matching the CLI/config spelling.
    pub fn name(self) -> &'static str {
        match self {
            ScreenId::Home => "home",
            ScreenId::Services => "services",
            ScreenId::Upload => "upload",
            ScreenId::History => "history",
            ScreenId::Profile => "profile",
            ScreenId::AgentProfile => "agent-profile",
            ScreenId::Settings => "settings",
            ScreenId::CashCounter => "cash-counter",
        }
    }

    /// Parse a wire name. `None` for anything outside the closed set;
    /// callers that need a screen no matter what fall back to `Home`.
    pub fn from_name(name: &str) -> Option<ScreenId> {
        ScreenId::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Whether the bottom navigation bar is shown on this screen.
    pub fn shows_bottom_nav(self) -> bool {
        NAV_TABS.contains(&self)
    }

    /// Fixed back target, mirroring each screen's back button.
    /// `Home` is the root and has none.
    pub fn back_target(self) -> Option<ScreenId> {
        match self {
            ScreenId::Home => None,
            ScreenId::Services => Some(ScreenId::Home),
            ScreenId::Upload => Some(ScreenId::Services),
            ScreenId::History => Some(ScreenId::Home),
            ScreenId::Profile => Some(ScreenId::Home),
            ScreenId::AgentProfile => Some(ScreenId::Home),
            ScreenId::Settings => Some(ScreenId::Profile),
            ScreenId::CashCounter => Some(ScreenId::Home),
        }
    }
}

/// Owns the current-screen value. The only mutation path is
/// [`Navigator::transition_to`], which keeps the single-writer invariant
/// without resorting to a process global.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    current: ScreenId,
}

impl Navigator {
    pub fn new(initial: ScreenId) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> ScreenId {
        self.current
    }

    /// Unconditionally replace the current screen. Transitioning to the
    /// already-current screen is an observable no-op.
    pub fn transition_to(&mut self, target: ScreenId) {
        if self.current != target {
            log::debug!("screen: {} -> {}", self.current.name(), target.name());
        }
        self.current = target;
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(ScreenId::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for screen in ScreenId::ALL {
            assert_eq!(ScreenId::from_name(screen.name()), Some(screen));
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        assert_eq!(ScreenId::from_name("dashboard"), None);
        assert_eq!(ScreenId::from_name(""), None);
        assert_eq!(ScreenId::from_name("Home"), None); // case-sensitive
    }

    #[test]
    fn test_bottom_nav_visibility_set() {
        let visible: Vec<ScreenId> = ScreenId::ALL
            .into_iter()
            .filter(|s| s.shows_bottom_nav())
            .collect();
        assert_eq!(visible, NAV_TABS);
        assert!(!ScreenId::Upload.shows_bottom_nav());
        assert!(!ScreenId::AgentProfile.shows_bottom_nav());
        assert!(!ScreenId::Settings.shows_bottom_nav());
        assert!(!ScreenId::CashCounter.shows_bottom_nav());
    }

    #[test]
    fn test_back_targets_reach_home() {
        // Following back edges from any screen must terminate at Home.
        for screen in ScreenId::ALL {
            let mut current = screen;
            let mut hops = 0;
            while let Some(target) = current.back_target() {
                current = target;
                hops += 1;
                assert!(hops <= ScreenId::ALL.len(), "back cycle from {screen:?}");
            }
            assert_eq!(current, ScreenId::Home);
        }
    }

    #[test]
    fn test_navigator_starts_at_home() {
        assert_eq!(Navigator::default().current(), ScreenId::Home);
    }

    #[test]
    fn test_navigator_transition_and_idempotence() {
        let mut nav = Navigator::default();
        nav.transition_to(ScreenId::Services);
        assert_eq!(nav.current(), ScreenId::Services);
        nav.transition_to(ScreenId::Services);
        assert_eq!(nav.current(), ScreenId::Services);
        nav.transition_to(ScreenId::CashCounter);
        assert_eq!(nav.current(), ScreenId::CashCounter);
    }
}
