//! Screen composition and mouse hit testing.
//!
//! ```text
//! ┌ title bar ──────────────────────────────┐  [ Accueil ]  title  [◀] [▶]
//! │                                          │
//! │        slide card (scrolls)              │  stars behind everything
//! │                                          │
//! ├ indicator dots ──────────────────────────┤  ○ ○ ● ○ ○ ○
//! ├ nav bar ─────────────────────────────────┤  ◀ Précédent  3 / 6  Suivant ▶
//! └ help (optional) ─────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::core::action::Action;
use crate::core::state::Presentation;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{IndicatorDots, NavBar, SlideView, Starfield, TitleBar};

const HELP_TEXT: &str =
    "←/→ diapo · 1-9 aller à · Début accueil · ↑/↓ défiler · ? aide · q quitter";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub slide: Rect,
    pub indicators: Rect,
    pub nav: Rect,
    pub help: Option<Rect>,
}

pub fn screen_layout(area: Rect, show_help: bool) -> ScreenLayout {
    use Constraint::{Length, Min};
    let help_height = if show_help { 1 } else { 0 };
    let [title, _gap, slide, indicators, nav, help] = Layout::vertical([
        Length(1),
        Length(1),
        Min(0),
        Length(1),
        Length(1),
        Length(help_height),
    ])
    .areas(area);

    ScreenLayout {
        title,
        slide,
        indicators,
        nav,
        help: show_help.then_some(help),
    }
}

pub fn draw_ui(frame: &mut Frame, presentation: &Presentation, tui: &mut TuiState, elapsed: f32) {
    let area = frame.area();
    let layout = screen_layout(area, tui.show_help);
    let navigation = &presentation.navigation;

    if tui.show_background {
        let background = presentation.background();
        Starfield::new(&background, elapsed, &tui.shooting_origins).render(frame, area);
    }

    TitleBar::new(
        navigation.deck().title().to_string(),
        presentation.status_message.clone(),
    )
    .render(frame, layout.title);

    SlideView::new(&mut tui.slide_view, navigation.current()).render(frame, layout.slide);

    IndicatorDots::new(navigation.indicators()).render(frame, layout.indicators);
    NavBar::new(navigation.indicators()).render(frame, layout.nav);

    if let Some(help_area) = layout.help {
        let help = Paragraph::new(HELP_TEXT)
            .style(Style::default().fg(Color::DarkGray))
            .centered();
        frame.render_widget(help, help_area);
    }
}

/// Map a click at screen `(column, row)` to the navigation control under it.
pub fn hit_test(
    column: u16,
    row: u16,
    frame_area: Rect,
    total_slides: usize,
    show_help: bool,
) -> Option<Action> {
    let layout = screen_layout(frame_area, show_help);
    let position = Position::new(column, row);

    if layout.title.contains(position) {
        TitleBar::hit_test(layout.title, position)
    } else if layout.indicators.contains(position) {
        IndicatorDots::hit_test(layout.indicators, total_slides, position).map(Action::GoTo)
    } else if layout.nav.contains(position) {
        NavBar::hit_test(layout.nav, position)
    } else {
        None
    }
}
