//! # Core Presentation Logic
//!
//! This module contains Stardeck's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Deck (content)       │
//!                    │  • NavigationState      │
//!                    │  • BackgroundField      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal, no UI.    │
//!                    └───────────┬─────────────┘
//!                                │ read-only
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
//! - [`deck`]: `Deck` and `Slide`, the content, loaded once
//! - [`navigation`]: `NavigationState`, the cyclic slide cursor
//! - [`background`]: `BackgroundField`, stars generated once per session
//! - [`state`]: `Presentation`, all session state in one place
//! - [`action`]: `Action` enum and the `update()` reducer
//! - [`config`]: settings file, env vars and CLI overrides

pub mod action;
pub mod background;
pub mod config;
pub mod deck;
pub mod navigation;
pub mod state;
