//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Two patterns, mirroring the data flow of the app:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Pure functions of their props, no memory of prior renders:
//! - `Header`: per-screen bilingual title with back hint
//! - `BottomNav`: the fixed 4-destination tab bar
//! - `screens::*`: the eight screen bodies
//!
//! ### Stateful Components (Event-Driven)
//!
//! Own local presentation state and emit high-level events:
//! - `UploadForm`: name/phone field buffers for the upload screen
//!
//! ## Design Philosophy
//!
//! Components receive external data as props rather than reading global
//! state, so dependencies stay explicit and every component renders under
//! `TestBackend` in isolation. Screen bodies are plain line producers; the
//! chrome (scroll view, status bar) is composed once in `tui::ui`.

mod bottom_nav;
pub use bottom_nav::BottomNav;
mod header;
pub use header::Header;
pub mod upload_form;
pub use upload_form::{FormEvent, UploadForm};

pub mod screens;
