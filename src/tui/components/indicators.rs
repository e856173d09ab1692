//! # Indicator Dots
//!
//! One dot per slide, the current one filled. Each dot is a click target
//! that jumps straight to its slide.
//!
//! Dots are spaced one cell apart when there is room, packed when there
//! isn't, and replaced by the plain counter when even that won't fit.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::core::navigation::Indicators;
use crate::tui::component::Component;

const ACTIVE: &str = "●";
const INACTIVE: &str = "○";

pub struct IndicatorDots {
    pub indicators: Indicators,
}

impl IndicatorDots {
    pub fn new(indicators: Indicators) -> Self {
        Self { indicators }
    }

    /// Cell of each dot inside `area`, or `None` if dots don't fit.
    pub fn dot_cells(area: Rect, total: usize) -> Option<Vec<Position>> {
        let width = usize::from(area.width);
        if total == 0 || total > width || area.height == 0 {
            return None;
        }
        let step = if total * 2 - 1 <= width { 2 } else { 1 };
        let used = (total - 1) * step + 1;
        let start = usize::from(area.x) + (width - used) / 2;
        let y = area.y + area.height / 2;
        Some(
            (0..total)
                .map(|i| Position::new((start + i * step) as u16, y))
                .collect(),
        )
    }

    /// Slide index under a click, if any.
    pub fn hit_test(area: Rect, total: usize, position: Position) -> Option<usize> {
        Self::dot_cells(area, total)?
            .iter()
            .position(|cell| *cell == position)
    }
}

impl Component for IndicatorDots {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(cells) = Self::dot_cells(area, self.indicators.total) else {
            let counter = Paragraph::new(self.indicators.counter()).centered();
            frame.render_widget(counter, area);
            return;
        };

        let buf = frame.buffer_mut();
        for ((_, active), cell) in self.indicators.iter().zip(cells) {
            let (symbol, style) = if active {
                (ACTIVE, Style::default().fg(Color::LightCyan).add_modifier(Modifier::BOLD))
            } else {
                (INACTIVE, Style::default().fg(Color::DarkGray))
            };
            if let Some(c) = buf.cell_mut(cell) {
                c.set_symbol(symbol).set_style(style);
            }
        }
    }
}
