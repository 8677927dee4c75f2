//! Mini Branch library exports for testing

pub mod core;
pub mod tui;

pub use crate::core::content::Language;
pub use crate::core::screen::ScreenId;
