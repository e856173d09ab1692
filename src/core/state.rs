//! # Presentation State
//!
//! Core session state for a running presentation. Domain logic only, no
//! TUI-specific types. Presentation-layer state lives in the `tui` module.
//!
//! ```text
//! Presentation
//! ├── navigation: NavigationState        // current slide over the deck
//! ├── background: Arc<BackgroundField>  // generated once, shared read-only
//! └── status_message: String            // status bar text
//! ```
//!
//! Navigation changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::background::BackgroundField;
use crate::core::deck::Deck;
use crate::core::navigation::NavigationState;

pub struct Presentation {
    pub navigation: NavigationState,
    background: Arc<BackgroundField>,
    pub status_message: String,
}

impl Presentation {
    /// Start a session at the first slide and generate its background.
    ///
    /// `seed` makes the star field reproducible; `None` draws from entropy.
    pub fn new(deck: Arc<Deck>, seed: Option<u64>) -> Self {
        let background = match seed {
            Some(seed) => BackgroundField::generate(&mut StdRng::seed_from_u64(seed)),
            None => BackgroundField::generate(&mut rand::rng()),
        };
        info!(
            "Presentation '{}' ready: {} slides, {} stars (seed: {:?})",
            deck.title(),
            deck.len(),
            background.stars().len(),
            seed
        );
        Self {
            navigation: NavigationState::new(deck),
            background: Arc::new(background),
            status_message: String::new(),
        }
    }

    /// The session's star field. Same allocation for the whole session.
    pub fn background(&self) -> Arc<BackgroundField> {
        Arc::clone(&self.background)
    }

    pub fn clear_status(&mut self) {
        self.status_message.clear();
    }
}
