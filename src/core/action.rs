//! # Actions
//!
//! Everything that can happen in a presentation becomes an `Action`.
//! Right arrow? That's `Action::Next`. Click on the third indicator dot?
//! That's `Action::GoTo(2)`.
//!
//! The `update()` function takes the current state and an action, applies it,
//! and returns an `Effect` telling the adapter what to do next. No I/O here.
//!
//! ```text
//! Presentation + Action  →  update()  →  Effect
//! ```
//!
//! Actions are applied in the order they arrive; the event loop never
//! batches or reorders them.

use log::{debug, info};

use crate::core::state::Presentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Previous,
    GoTo(usize),
    /// Back to the title slide.
    Home,
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Redraw,
    Quit,
}

pub fn update(state: &mut Presentation, action: Action) -> Effect {
    debug!("Applying {:?} at slide {}", action, state.navigation.current_index());

    match action {
        Action::Next => {
            state.navigation.next();
            state.clear_status();
            Effect::Redraw
        }
        Action::Previous => {
            state.navigation.previous();
            state.clear_status();
            Effect::Redraw
        }
        Action::GoTo(index) => match state.navigation.go_to(index) {
            Ok(()) => {
                state.clear_status();
                Effect::Redraw
            }
            Err(e) => {
                state.status_message = e.to_string();
                Effect::Redraw
            }
        },
        Action::Home => update(state, Action::GoTo(0)),
        Action::Quit => {
            info!("Quit requested on slide {}", state.navigation.current_index());
            Effect::Quit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_presentation;

    #[test]
    fn test_next_and_previous_redraw() {
        let mut state = test_presentation(3);
        assert_eq!(update(&mut state, Action::Next), Effect::Redraw);
        assert_eq!(state.navigation.current_index(), 1);
        assert_eq!(update(&mut state, Action::Previous), Effect::Redraw);
        assert_eq!(state.navigation.current_index(), 0);
    }

    #[test]
    fn test_actions_apply_in_arrival_order() {
        let mut state = test_presentation(6);
        for action in [
            Action::Next,
            Action::Next,
            Action::GoTo(5),
            Action::Next,
            Action::Previous,
        ] {
            update(&mut state, action);
        }
        assert_eq!(state.navigation.current_index(), 5);
    }

    #[test]
    fn test_go_to_out_of_range_sets_status() {
        let mut state = test_presentation(6);
        update(&mut state, Action::GoTo(2));

        let effect = update(&mut state, Action::GoTo(8));
        assert_eq!(effect, Effect::Redraw);
        assert_eq!(state.navigation.current_index(), 2);
        assert!(state.status_message.contains("out of range"));

        update(&mut state, Action::Next);
        assert!(state.status_message.is_empty());
    }

    #[test]
    fn test_home_returns_to_first_slide() {
        let mut state = test_presentation(4);
        update(&mut state, Action::Previous);
        update(&mut state, Action::Home);
        assert_eq!(state.navigation.current_index(), 0);
    }

    #[test]
    fn test_quit_leaves_state_alone() {
        let mut state = test_presentation(4);
        update(&mut state, Action::Next);
        assert_eq!(update(&mut state, Action::Quit), Effect::Quit);
        assert_eq!(state.navigation.current_index(), 1);
    }
}
