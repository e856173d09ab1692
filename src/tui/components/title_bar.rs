//! # TitleBar Component
//!
//! Top navigation row:
//!
//! ```text
//! [ Accueil ]      La conquête spatiale… | status      [◀] [▶]
//! ```
//!
//! The home button and both arrows are click targets. The deck title is
//! truncated (by display width) to whatever room the buttons leave.
//!
//! TitleBar is purely presentational: it receives all data as props.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::action::Action;
use crate::tui::component::Component;

const HOME_LABEL: &str = "[ Accueil ]";
const ARROWS_LABEL: &str = "[◀] [▶]";

pub struct TitleBar {
    pub deck_title: String,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(deck_title: String, status_message: String) -> Self {
        Self {
            deck_title,
            status_message,
        }
    }

    fn home_rect(area: Rect) -> Rect {
        Rect::new(area.x, area.y, (HOME_LABEL.width() as u16).min(area.width), 1)
    }

    fn arrows_rect(area: Rect) -> Rect {
        let width = (ARROWS_LABEL.width() as u16).min(area.width);
        Rect::new(area.right().saturating_sub(width), area.y, width, 1)
    }

    /// Which control, if any, sits under a click.
    pub fn hit_test(area: Rect, position: Position) -> Option<Action> {
        if position.y != area.y {
            return None;
        }
        if Self::home_rect(area).contains(position) {
            return Some(Action::Home);
        }
        let arrows = Self::arrows_rect(area);
        if arrows.contains(position) {
            // "[◀]" then a space then "[▶]"
            let offset = position.x - arrows.x;
            return match offset {
                0..=2 => Some(Action::Previous),
                4..=6 => Some(Action::Next),
                _ => None,
            };
        }
        None
    }

    fn title_text(&self) -> String {
        if self.status_message.is_empty() {
            self.deck_title.clone()
        } else {
            format!("{} | {}", self.deck_title, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let button = Style::default().fg(Color::LightCyan).add_modifier(Modifier::BOLD);

        let home = Self::home_rect(area);
        frame.render_widget(Span::styled(HOME_LABEL, button), home);

        let arrows = Self::arrows_rect(area);
        frame.render_widget(Span::styled(ARROWS_LABEL, button), arrows);

        let middle_x = home.right() + 1;
        let middle_width = arrows.x.saturating_sub(middle_x + 1);
        if middle_width == 0 {
            return;
        }
        let middle = Rect::new(middle_x, area.y, middle_width, 1);
        let title = truncate_to_width(&self.title_text(), usize::from(middle_width));
        let line = Line::from(Span::styled(title, Style::default().fg(Color::White)));
        frame.render_widget(Paragraph::new(line).centered(), middle);
    }
}

/// Truncate to `max_width` display cells, ending with "…" when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
