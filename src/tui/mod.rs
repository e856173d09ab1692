//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard and mouse input into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm ──► TuiEvent ──► InputBinding ──► mpsc<Action> ──► update() ──► Effect
//!                  │                                               │
//!                  └─► SlideViewState (scroll, local)              ▼
//!                          NavigationEvent ──► reset scroll, new shooting-star origins
//! ```
//!
//! ## Redraw Strategy
//!
//! The background is always animating, so the loop draws once per tick
//! (`display.tick_ms`) and drains every pending event between frames.

mod component;
mod components;
mod event;
mod input;
pub mod markdown;
mod ui;

use std::io::{self, stdout};
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::action::{Action, Effect, update};
use crate::core::background::{BackgroundField, Origin};
use crate::core::config::ResolvedConfig;
use crate::core::deck::Deck;
use crate::core::navigation::NavigationEvent;
use crate::core::state::Presentation;
use crate::tui::component::EventHandler;
use crate::tui::components::SlideViewState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::input::InputBinding;

/// Mixed into the session seed so shooting-star origins don't replay the
/// star layout's random sequence.
const SHOOTING_STAR_SEED_SALT: u64 = 0x5eed_57a2;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub slide_view: SlideViewState,
    pub show_help: bool,
    pub show_background: bool,
    /// Where each shooting-star slot starts its streak. Fixed between slide
    /// changes.
    pub shooting_origins: Vec<Origin>,
    rng: StdRng,
}

impl TuiState {
    pub fn new(
        show_background: bool,
        show_help: bool,
        seed: Option<u64>,
        field: &BackgroundField,
    ) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed ^ SHOOTING_STAR_SEED_SALT),
            None => StdRng::from_os_rng(),
        };
        let shooting_origins = field.sample_origins(&mut rng);
        Self {
            slide_view: SlideViewState::new(),
            show_help,
            show_background,
            shooting_origins,
            rng,
        }
    }

    /// Back to the top of the new slide, with fresh shooting-star origins.
    pub fn on_slide_changed(&mut self, field: &BackgroundField) {
        self.slide_view.reset();
        self.shooting_origins = field.sample_origins(&mut self.rng);
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// Run the presentation until the user quits.
///
/// `start` is a 0-based slide to open on; an out-of-range value leaves the
/// session on the first slide and shows the error in the status line.
pub fn run(config: &ResolvedConfig, deck: Deck, start: Option<usize>) -> io::Result<()> {
    let mut presentation = Presentation::new(Arc::new(deck), config.seed);
    let mut tui = TuiState::new(
        config.show_background,
        config.show_help,
        config.seed,
        &presentation.background(),
    );
    let slide_changes = presentation.navigation.subscribe();

    if let Some(index) = start {
        update(&mut presentation, Action::GoTo(index));
    }

    let (tx, rx) = mpsc::channel();
    let binding = InputBinding::attach(tx);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let tick = Duration::from_millis(config.tick_ms);
    let start_time = Instant::now();
    let mut should_quit = false;

    while !should_quit {
        let elapsed = start_time.elapsed().as_secs_f32();
        terminal.draw(|f| ui::draw_ui(f, &presentation, &mut tui, elapsed))?;

        // Process first event + drain everything pending before the next frame
        let mut pending = poll_event_timeout(tick)?;
        while let Some(event) = pending {
            match event {
                // Picked up by the next draw
                TuiEvent::Resize => {}
                TuiEvent::ScrollUp | TuiEvent::ScrollDown => {
                    tui.slide_view.handle_event(&event);
                }
                TuiEvent::ToggleHelp => tui.show_help = !tui.show_help,
                TuiEvent::Click(column, row) => {
                    let frame_area = terminal.get_frame().area();
                    let total = presentation.navigation.len();
                    let hit = ui::hit_test(column, row, frame_area, total, tui.show_help);
                    if let Some(action) = hit {
                        binding.send(action);
                    }
                }
                _ => {
                    binding.dispatch(&event);
                }
            }
            pending = poll_event_immediate()?;
        }

        while let Ok(action) = rx.try_recv() {
            debug!("Event loop received: {:?}", action);
            if update(&mut presentation, action) == Effect::Quit {
                should_quit = true;
                break;
            }
        }

        while let Ok(NavigationEvent::SlideChanged { from, to }) = slide_changes.try_recv() {
            debug!("Slide {} -> {}: scroll reset, new shooting stars", from, to);
            tui.on_slide_changed(&presentation.background());
        }
    }

    drop(binding);
    ratatui::restore();
    Ok(())
}
