//! # Input Binding
//!
//! Turns navigation signals into core `Action`s for the session that owns
//! the receiving end of the channel.
//!
//! - advance → exactly one `Action::Next`
//! - retreat → exactly one `Action::Previous`
//! - anything unbound → ignored
//!
//! The binding is attached for the lifetime of the view. If it outlives its
//! session, the receiver is gone and sends fail harmlessly instead of
//! touching a torn-down navigation state.

use std::sync::mpsc::Sender;

use log::{debug, info, warn};

use crate::core::action::Action;
use crate::tui::event::TuiEvent;

/// The navigation action bound to a TUI event, if any.
pub fn action_for(event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Advance => Some(Action::Next),
        TuiEvent::Retreat => Some(Action::Previous),
        TuiEvent::Home => Some(Action::Home),
        TuiEvent::Jump(n) if *n >= 1 => Some(Action::GoTo(usize::from(*n) - 1)),
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        _ => None,
    }
}

pub struct InputBinding {
    tx: Sender<Action>,
}

impl InputBinding {
    pub fn attach(tx: Sender<Action>) -> Self {
        info!("Input binding attached");
        Self { tx }
    }

    /// Forward `event` if it is bound. Returns true when an action was delivered.
    pub fn dispatch(&self, event: &TuiEvent) -> bool {
        match action_for(event) {
            Some(action) => self.send(action),
            None => false,
        }
    }

    /// Deliver an action produced by another control (indicator or button clicks).
    pub fn send(&self, action: Action) -> bool {
        debug!("Input binding -> {:?}", action);
        if self.tx.send(action).is_err() {
            warn!("Dropped {:?}: session is gone", action);
            return false;
        }
        true
    }
}

impl Drop for InputBinding {
    fn drop(&mut self) {
        info!("Input binding detached");
    }
}
