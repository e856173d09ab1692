//! # SlideView Component
//!
//! The content card for the current slide: icon, title, subtitle, then the
//! markdown body. Long bodies scroll inside the card.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SlideViewState` lives in `TuiState`
//! - `SlideView` is created each frame with borrowed state and the slide as props

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::deck::Slide;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::markdown;

/// Widest the card gets on large terminals, in cells.
pub const MAX_CARD_WIDTH: u16 = 96;
const SCROLL_STEP: u16 = 1;

/// Scroll state for the slide body. Persisted in `TuiState`.
#[derive(Default)]
pub struct SlideViewState {
    pub scroll_state: ScrollViewState,
    /// Rendered height of the current slide, measured on the last frame.
    pub content_height: u16,
    /// Card height on the last frame.
    pub viewport_height: u16,
}

/// Emitted when the body actually moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideViewEvent {
    Scrolled(u16),
}

impl SlideViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the top; called whenever the slide changes.
    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }

    pub fn offset(&self) -> u16 {
        self.scroll_state.offset().y
    }

    fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    fn set_offset(&mut self, y: u16) {
        self.scroll_state.set_offset(Position { x: 0, y });
    }
}

impl EventHandler for SlideViewState {
    type Event = SlideViewEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SlideViewEvent> {
        let before = self.offset();
        let after = match event {
            TuiEvent::ScrollUp => before.saturating_sub(SCROLL_STEP),
            TuiEvent::ScrollDown => before.saturating_add(SCROLL_STEP).min(self.max_offset()),
            _ => return None,
        };
        if after == before {
            return None;
        }
        self.set_offset(after);
        Some(SlideViewEvent::Scrolled(after))
    }
}

/// Transient render wrapper for the current slide.
pub struct SlideView<'a> {
    state: &'a mut SlideViewState,
    slide: &'a Slide,
}

impl<'a> SlideView<'a> {
    pub fn new(state: &'a mut SlideViewState, slide: &'a Slide) -> Self {
        Self { state, slide }
    }

    /// Card area: horizontally centered, capped at `MAX_CARD_WIDTH`.
    pub fn card_area(area: Rect) -> Rect {
        let width = area.width.min(MAX_CARD_WIDTH);
        let x = area.x + (area.width - width) / 2;
        Rect::new(x, area.y, width, area.height)
    }

    fn header(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        if let Some(icon) = &self.slide.icon {
            lines.push(Line::from(icon.clone()).alignment(Alignment::Center));
            lines.push(Line::default());
        }
        lines.push(
            Line::from(Span::styled(
                self.slide.title.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        );
        if let Some(subtitle) = &self.slide.subtitle {
            lines.push(
                Line::from(Span::styled(
                    subtitle.clone(),
                    Style::default().fg(Color::LightBlue).add_modifier(Modifier::ITALIC),
                ))
                .alignment(Alignment::Center),
            );
        }
        lines.push(Line::default());
        lines
    }
}

impl Component for SlideView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let card = Self::card_area(area);
        // One column for the scrollbar
        let content_width = card.width.saturating_sub(1);

        let mut text = Text::from(self.header());
        text.extend(markdown::render(&self.slide.content, Color::Gray));

        let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
        let content_height = paragraph.line_count(content_width).min(u16::MAX as usize) as u16;

        self.state.content_height = content_height;
        self.state.viewport_height = card.height;
        if self.state.offset() > self.state.max_offset() {
            let max = self.state.max_offset();
            self.state.set_offset(max);
        }

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));

        frame.render_stateful_widget(scroll_view, card, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn long_slide() -> Slide {
        let body = (0..40).map(|i| format!("Paragraph {i}")).collect::<Vec<_>>().join("\n\n");
        Slide::new("Long", body)
    }

    #[test]
    fn test_renders_title_subtitle_and_body() {
        let mut slide = Slide::new("Introduction", "Pendant la guerre froide");
        slide.subtitle = Some("Sous-titre".to_string());
        let mut state = SlideViewState::new();

        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|f| SlideView::new(&mut state, &slide).render(f, f.area()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Introduction"));
        assert!(text.contains("Sous-titre"));
        assert!(text.contains("Pendant la guerre froide"));
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let slide = long_slide();
        let mut state = SlideViewState::new();
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|f| SlideView::new(&mut state, &slide).render(f, f.area()))
            .unwrap();

        assert!(state.content_height > 10);
        for _ in 0..500 {
            state.handle_event(&TuiEvent::ScrollDown);
        }
        assert_eq!(state.offset(), state.content_height - 10);
        assert_eq!(state.handle_event(&TuiEvent::ScrollDown), None);
    }

    #[test]
    fn test_scroll_up_at_top_is_noop() {
        let mut state = SlideViewState::new();
        assert_eq!(state.handle_event(&TuiEvent::ScrollUp), None);
        assert_eq!(state.handle_event(&TuiEvent::Advance), None);
    }

    #[test]
    fn test_reset_returns_to_top() {
        let slide = long_slide();
        let mut state = SlideViewState::new();
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|f| SlideView::new(&mut state, &slide).render(f, f.area()))
            .unwrap();

        assert_eq!(state.handle_event(&TuiEvent::ScrollDown), Some(SlideViewEvent::Scrolled(1)));
        state.reset();
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn test_card_is_centered_and_capped() {
        let card = SlideView::card_area(Rect::new(0, 0, 200, 30));
        assert_eq!(card.width, MAX_CARD_WIDTH);
        assert_eq!(card.x, (200 - MAX_CARD_WIDTH) / 2);

        let narrow = SlideView::card_area(Rect::new(0, 0, 50, 30));
        assert_eq!(narrow, Rect::new(0, 0, 50, 30));
    }
}
