//! # Navigation State
//!
//! The single source of truth for which slide is showing.
//!
//! ```text
//!        previous()              next()
//!   ┌──────────────────┐   ┌──────────────────┐
//!   ▼                  │   │                  ▼
//!  [0] ─▶ [1] ─▶ ... ─▶ [N-1] ─▶ wraps back to [0]
//!   ▲                                          │
//!   └──────────── go_to(k), 0 ≤ k < N ─────────┘
//! ```
//!
//! Every position is reachable and none is terminal. `next`/`previous` are
//! total; `go_to` rejects out-of-range indices and leaves the state alone.
//!
//! Observers subscribe through [`NavigationState::subscribe`] and receive a
//! [`NavigationEvent`] whenever the index actually changes.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

use log::{debug, warn};
use thiserror::Error;

use crate::core::deck::{Deck, Slide};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("slide {index} is out of range (deck has {len} slides)")]
    OutOfRange { index: usize, len: usize },
}

/// Notification sent to subscribers after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    SlideChanged { from: usize, to: usize },
}

/// Read-only snapshot for drawing one indicator per slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicators {
    pub current: usize,
    pub total: usize,
}

impl Indicators {
    /// Yields `(index, is_active)` for every slide.
    pub fn iter(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.total).map(move |i| (i, i == self.current))
    }

    /// Human-readable position, e.g. `"3 / 6"`.
    pub fn counter(&self) -> String {
        format!("{} / {}", self.current + 1, self.total)
    }
}

pub struct NavigationState {
    deck: Arc<Deck>,
    current_index: usize,
    subscribers: Vec<Sender<NavigationEvent>>,
}

impl NavigationState {
    /// Starts at the first slide.
    pub fn new(deck: Arc<Deck>) -> Self {
        Self {
            deck,
            current_index: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The slide at the current position.
    pub fn current(&self) -> &Slide {
        // current_index < len is upheld by every mutation below
        &self.deck.slides()[self.current_index]
    }

    pub fn indicators(&self) -> Indicators {
        Indicators {
            current: self.current_index,
            total: self.len(),
        }
    }

    /// Advance one slide, wrapping from the last to the first.
    pub fn next(&mut self) {
        let to = (self.current_index + 1) % self.len();
        self.move_to(to);
    }

    /// Go back one slide, wrapping from the first to the last.
    pub fn previous(&mut self) {
        let len = self.len();
        let to = (self.current_index + len - 1) % len;
        self.move_to(to);
    }

    /// Jump straight to `index`. No wrapping: out-of-range is an error.
    pub fn go_to(&mut self, index: usize) -> Result<(), NavigationError> {
        let len = self.len();
        if index >= len {
            warn!("Rejected go_to({}) on a deck of {} slides", index, len);
            return Err(NavigationError::OutOfRange { index, len });
        }
        self.move_to(index);
        Ok(())
    }

    /// Register an observer. Dropping the receiver unsubscribes it.
    pub fn subscribe(&mut self) -> Receiver<NavigationEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn move_to(&mut self, to: usize) {
        let from = self.current_index;
        if from == to {
            return;
        }
        self.current_index = to;
        debug!("Slide {} -> {}", from, to);

        let event = NavigationEvent::SlideChanged { from, to };
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_deck, test_navigation};

    #[test]
    fn test_starts_at_zero() {
        let nav = test_navigation(6);
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.current().title, "Slide 0");
    }

    #[test]
    fn test_five_nexts_then_wrap() {
        let mut nav = test_navigation(6);
        for _ in 0..5 {
            nav.next();
        }
        assert_eq!(nav.current_index(), 5);
        nav.next();
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_previous_from_zero_wraps_to_last() {
        let mut nav = test_navigation(6);
        nav.previous();
        assert_eq!(nav.current_index(), 5);
    }

    #[test]
    fn test_go_to_selects_position_three() {
        let mut nav = test_navigation(6);
        nav.next();
        nav.next();
        nav.next();
        nav.next();
        nav.go_to(3).unwrap();
        assert_eq!(nav.current_index(), 3);
        assert_eq!(nav.current().title, "Slide 3");
    }

    #[test]
    fn test_go_to_out_of_range_is_rejected() {
        let mut nav = test_navigation(6);
        nav.go_to(2).unwrap();

        let err = nav.go_to(6).unwrap_err();
        assert_eq!(err, NavigationError::OutOfRange { index: 6, len: 6 });
        assert_eq!(nav.current_index(), 2);

        assert!(nav.go_to(usize::MAX).is_err());
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn test_single_slide_deck_stays_put() {
        let mut nav = test_navigation(1);
        nav.next();
        assert_eq!(nav.current_index(), 0);
        nav.previous();
        assert_eq!(nav.current_index(), 0);
        nav.go_to(0).unwrap();
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_current_indexes_by_position_not_id() {
        let mut deck = test_deck(3);
        // Scramble ids so they no longer match positions
        let slides: Vec<_> = deck
            .slides()
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, mut s)| {
                s.id = Some(100 - i as u32);
                s
            })
            .collect();
        deck = Deck::new("scrambled", slides).unwrap();

        let mut nav = NavigationState::new(Arc::new(deck));
        nav.go_to(1).unwrap();
        assert_eq!(nav.current().title, "Slide 1");
        assert_eq!(nav.current().id, Some(99));
    }

    #[test]
    fn test_subscribers_see_changes_in_order() {
        let mut nav = test_navigation(4);
        let rx = nav.subscribe();

        nav.next();
        nav.go_to(3).unwrap();
        nav.previous();

        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                NavigationEvent::SlideChanged { from: 0, to: 1 },
                NavigationEvent::SlideChanged { from: 1, to: 3 },
                NavigationEvent::SlideChanged { from: 3, to: 2 },
            ]
        );
    }

    #[test]
    fn test_no_event_when_index_unchanged() {
        let mut nav = test_navigation(4);
        let rx = nav.subscribe();

        nav.go_to(0).unwrap();
        let _ = nav.go_to(9);

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let mut nav = test_navigation(3);
        let kept = nav.subscribe();
        let dropped = nav.subscribe();
        assert_eq!(nav.subscriber_count(), 2);

        drop(dropped);
        nav.next();

        assert_eq!(nav.subscriber_count(), 1);
        assert_eq!(kept.try_recv().unwrap(), NavigationEvent::SlideChanged { from: 0, to: 1 });
    }

    #[test]
    fn test_indicators_mark_one_active() {
        let mut nav = test_navigation(5);
        nav.go_to(2).unwrap();

        let indicators = nav.indicators();
        let active: Vec<_> = indicators
            .iter()
            .filter(|(_, a)| *a)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(active, vec![2]);
        assert_eq!(indicators.iter().count(), 5);
        assert_eq!(indicators.counter(), "3 / 5");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        /// Deck length and a valid starting position within it.
        fn deck_and_start() -> impl Strategy<Value = (usize, usize)> {
            (1usize..40).prop_flat_map(|len| (Just(len), 0..len))
        }

        fn navigation_at(len: usize, start: usize) -> NavigationState {
            let mut nav = test_navigation(len);
            nav.go_to(start).unwrap();
            nav
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn prop_next_n_times_is_identity((len, start) in deck_and_start()) {
                let mut nav = navigation_at(len, start);
                for _ in 0..len {
                    nav.next();
                }
                prop_assert_eq!(nav.current_index(), start);
            }

            #[test]
            fn prop_previous_undoes_next((len, start) in deck_and_start()) {
                let mut nav = navigation_at(len, start);
                nav.next();
                nav.previous();
                prop_assert_eq!(nav.current_index(), start);

                nav.previous();
                nav.next();
                prop_assert_eq!(nav.current_index(), start);
            }

            #[test]
            fn prop_go_to_is_exact((len, start) in deck_and_start(), target in 0usize..40) {
                let mut nav = navigation_at(len, start);
                let result = nav.go_to(target);
                if target < len {
                    prop_assert!(result.is_ok());
                    prop_assert_eq!(nav.current_index(), target);
                } else {
                    prop_assert!(result.is_err());
                    prop_assert_eq!(nav.current_index(), start);
                }
            }

            #[test]
            fn prop_index_stays_in_bounds(
                len in 1usize..20,
                ops in proptest::collection::vec(0u8..3, 0..64),
            ) {
                let mut nav = test_navigation(len);
                for (step, op) in ops.into_iter().enumerate() {
                    match op {
                        0 => nav.next(),
                        1 => nav.previous(),
                        _ => { let _ = nav.go_to(step); }
                    }
                    prop_assert!(nav.current_index() < len);
                }
            }
        }
    }
}
