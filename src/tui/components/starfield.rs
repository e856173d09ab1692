//! # Starfield Component
//!
//! Paints the session's `BackgroundField` straight into the frame buffer:
//! twinkling stars, two static planets, and whichever shooting stars are
//! mid-streak. Drawn first so every other component sits on top of it.
//!
//! Star positions come from the field and never change. Shooting-star
//! origins are a prop: `TuiState` samples them once and again only when the
//! slide changes, so a streak travels from a fixed start between changes.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Color;

use crate::core::background::{BackgroundField, Origin};
use crate::tui::component::Component;

/// Seconds a shooting star takes to cross its streak.
pub const STREAK_SECS: f32 = 1.0;
/// Streak length as a percentage of the viewport width.
const STREAK_SPAN: f32 = 30.0;
const TAIL_CELLS: u16 = 4;

/// Static decoration: (left %, top %, radius in cells, color).
const PLANETS: [(f32, f32, u16, Color); 2] = [
    (86.0, 18.0, 2, Color::Rgb(176, 96, 48)),
    (10.0, 78.0, 1, Color::Rgb(72, 110, 180)),
];

pub struct Starfield<'a> {
    pub field: &'a BackgroundField,
    /// Seconds since the session started.
    pub elapsed: f32,
    /// One per shooting-star slot, in slot order.
    pub origins: &'a [Origin],
}

impl<'a> Starfield<'a> {
    pub fn new(field: &'a BackgroundField, elapsed: f32, origins: &'a [Origin]) -> Self {
        Self {
            field,
            elapsed,
            origins,
        }
    }

    fn paint(&mut self, buf: &mut Buffer, area: Rect) {
        if area.is_empty() {
            return;
        }

        for star in self.field.stars() {
            let cell = project(area, star.left, star.top);
            let brightness = 0.3 + 0.7 * star.brightness(self.elapsed);
            put(buf, cell, star_symbol(star.size), star_color(brightness));
        }

        for &(left, top, radius, color) in &PLANETS {
            paint_planet(buf, area, project(area, left, top), radius, color);
        }

        for (slot, origin) in self.field.shooting_stars().iter().zip(self.origins) {
            let Some(progress) = slot.progress(self.elapsed, STREAK_SECS) else {
                continue;
            };
            let head_left = origin.left + STREAK_SPAN * progress;
            let head_top = origin.top + STREAK_SPAN * 0.5 * progress;
            let head = project(area, head_left.min(99.9), head_top.min(99.9));
            for i in 1..=TAIL_CELLS {
                let (Some(x), Some(y)) = (head.x.checked_sub(i * 2), head.y.checked_sub(i / 2))
                else {
                    break;
                };
                let tail = Position::new(x, y);
                if area.contains(tail) {
                    put(buf, tail, "─", Color::DarkGray);
                }
            }
            put(buf, head, "✦", Color::White);
        }
    }
}

impl Component for Starfield<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.paint(frame.buffer_mut(), area);
    }
}

/// Map percentage coordinates onto a cell inside `area`.
pub fn project(area: Rect, left: f32, top: f32) -> Position {
    let x = (left / 100.0 * f32::from(area.width)) as u16;
    let y = (top / 100.0 * f32::from(area.height)) as u16;
    Position::new(
        area.x + x.min(area.width.saturating_sub(1)),
        area.y + y.min(area.height.saturating_sub(1)),
    )
}

fn star_symbol(size: f32) -> &'static str {
    if size < 1.8 {
        "·"
    } else if size < 2.6 {
        "•"
    } else {
        "✶"
    }
}

fn star_color(brightness: f32) -> Color {
    if brightness > 0.8 {
        Color::White
    } else if brightness > 0.55 {
        Color::Gray
    } else {
        Color::DarkGray
    }
}

fn paint_planet(buf: &mut Buffer, area: Rect, center: Position, radius: u16, color: Color) {
    let r = i32::from(radius);
    for dy in -r..=r {
        // Cells are about twice as tall as wide
        let half_width = ((r * r - dy * dy) as f32).sqrt() as i32 * 2;
        for dx in -half_width..=half_width {
            let x = i32::from(center.x) + dx;
            let y = i32::from(center.y) + dy;
            if x < i32::from(area.x) || y < i32::from(area.y) {
                continue;
            }
            let cell = Position::new(x as u16, y as u16);
            if area.contains(cell) {
                put(buf, cell, "█", color);
            }
        }
    }
}

fn put(buf: &mut Buffer, position: Position, symbol: &str, color: Color) {
    if let Some(cell) = buf.cell_mut(position) {
        cell.set_symbol(symbol).set_fg(color);
    }
}
