//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::core::deck::{Deck, Slide};
use crate::core::navigation::NavigationState;
use crate::core::state::Presentation;

/// A deck of `len` slides titled "Slide 0", "Slide 1", ...
pub fn test_deck(len: usize) -> Deck {
    let slides = (0..len)
        .map(|i| Slide::new(format!("Slide {i}"), format!("Body of slide {i}")))
        .collect();
    Deck::new("Test deck", slides).expect("test deck must not be empty")
}

pub fn test_navigation(len: usize) -> NavigationState {
    NavigationState::new(Arc::new(test_deck(len)))
}

/// A seeded presentation over `test_deck(len)`.
pub fn test_presentation(len: usize) -> Presentation {
    Presentation::new(Arc::new(test_deck(len)), Some(1))
}
