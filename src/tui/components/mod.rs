//! # TUI Components
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Receive everything they draw as constructor arguments:
//! - `TitleBar`: deck title, status message, home and arrow buttons
//! - `IndicatorDots`: one clickable dot per slide
//! - `NavBar`: previous/next buttons around the slide counter
//! - `Starfield`: the animated background
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `SlideView`: the slide card. Its scroll position lives in
//!   `SlideViewState`, which persists across frames and is reset whenever
//!   the current slide changes.
//!
//! Clickable components expose an associated `hit_test(area, position)`
//! that `ui::hit_test` calls with the same layout used for drawing.
//!
//! ```text
//! components/
//! ├── mod.rs
//! ├── title_bar.rs
//! ├── slide_view.rs
//! ├── indicators.rs
//! ├── nav_bar.rs
//! └── starfield.rs
//! ```

mod indicators;
mod nav_bar;
pub mod slide_view;
mod starfield;
mod title_bar;

pub use indicators::IndicatorDots;
pub use nav_bar::NavBar;
pub use slide_view::{SlideView, SlideViewState};
pub use starfield::Starfield;
pub use title_bar::TitleBar;
