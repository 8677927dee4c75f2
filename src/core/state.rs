//! # Application State
//!
//! Core state for the mini-branch app. Domain only — presentation state
//! (cursor, scroll, form buffers) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── navigator: Navigator      // current screen, single writer path
//! ├── language: Language        // label display mode
//! └── status_message: String    // status bar text
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::content::Language;
use crate::core::screen::{Navigator, ScreenId};

pub struct App {
    pub navigator: Navigator,
    pub language: Language,
    pub status_message: String,
}

impl App {
    pub fn new(initial: ScreenId, language: Language) -> Self {
        Self {
            navigator: Navigator::new(initial),
            language,
            status_message: String::new(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.start_screen, config.language)
    }

    /// The screen currently on display.
    pub fn screen(&self) -> ScreenId {
        self.navigator.current()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(ScreenId::Home, Language::default())
    }
}
