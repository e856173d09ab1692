use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Navigation signals (routed through the input binding)
    Advance,
    Retreat,
    Home,
    /// Digit key `1`–`9`, 1-based.
    Jump(u8),
    Quit,
    ForceQuit,

    // TUI-local events (handled directly in TUI)
    ScrollUp,
    ScrollDown,
    ToggleHelp,
    Click(u16, u16),
    Resize,
}

/// Poll for an event with timeout
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(translate(event::read()?))
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Map a raw crossterm event. Unbound input yields `None`.
pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            translate_key(key_event)
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::Click(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Right | KeyCode::PageDown | KeyCode::Enter) => Some(TuiEvent::Advance),
        (_, KeyCode::Char('l' | ' ')) => Some(TuiEvent::Advance),
        (_, KeyCode::Left | KeyCode::PageUp | KeyCode::Backspace) => Some(TuiEvent::Retreat),
        (_, KeyCode::Char('h')) => Some(TuiEvent::Retreat),
        (_, KeyCode::Home) => Some(TuiEvent::Home),
        (_, KeyCode::Char(c @ '1'..='9')) => Some(TuiEvent::Jump(c as u8 - b'0')),
        (_, KeyCode::Up | KeyCode::Char('k')) => Some(TuiEvent::ScrollUp),
        (_, KeyCode::Down | KeyCode::Char('j')) => Some(TuiEvent::ScrollDown),
        (_, KeyCode::Char('?')) => Some(TuiEvent::ToggleHelp),
        (_, KeyCode::Esc | KeyCode::Char('q')) => Some(TuiEvent::Quit),
        _ => None,
    }
}
