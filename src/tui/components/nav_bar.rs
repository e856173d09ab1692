//! # NavBar Component
//!
//! Bottom row with large previous/next buttons around the slide counter:
//!
//! ```text
//! ◀ Précédent                3 / 6                  Suivant ▶
//! ```

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::action::Action;
use crate::core::navigation::Indicators;
use crate::tui::component::Component;

const PREVIOUS_LABEL: &str = "◀ Précédent";
const NEXT_LABEL: &str = "Suivant ▶";

pub struct NavBar {
    pub indicators: Indicators,
}

impl NavBar {
    pub fn new(indicators: Indicators) -> Self {
        Self { indicators }
    }

    fn previous_rect(area: Rect) -> Rect {
        Rect::new(area.x, area.y, (PREVIOUS_LABEL.width() as u16).min(area.width), 1)
    }

    fn next_rect(area: Rect) -> Rect {
        let width = (NEXT_LABEL.width() as u16).min(area.width);
        Rect::new(area.right().saturating_sub(width), area.y, width, 1)
    }

    pub fn hit_test(area: Rect, position: Position) -> Option<Action> {
        if Self::previous_rect(area).contains(position) {
            Some(Action::Previous)
        } else if Self::next_rect(area).contains(position) {
            Some(Action::Next)
        } else {
            None
        }
    }
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let button = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

        let counter = Paragraph::new(self.indicators.counter())
            .style(Style::default().fg(Color::Gray))
            .centered();
        frame.render_widget(counter, area);
        frame.render_widget(Span::styled(PREVIOUS_LABEL, button), Self::previous_rect(area));
        frame.render_widget(Span::styled(NEXT_LABEL, button), Self::next_rect(area));
    }
}
