//! # Core Application Logic
//!
//! The mini-branch domain: screens, navigation state, static content,
//! configuration. It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ScreenId / Navigator │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • static content       │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`screen`]: The closed `ScreenId` set and the `Navigator` owning it
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum — everything that can happen in the app
//! - [`content`]: Compiled-in bilingual content for all eight screens
//! - [`config`]: Layered settings (defaults → file → env → CLI)

pub mod action;
pub mod config;
pub mod content;
pub mod screen;
pub mod state;
