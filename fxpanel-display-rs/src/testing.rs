//! Canvas that records calls instead of drawing.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::canvas::{Canvas, FontKey, Paint};

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Fill(Rgb565),
    RoundedRect {
        rect: Rectangle,
        radius: u32,
        color: Rgb565,
        paint: Paint,
    },
    Circle {
        center: Point,
        radius: u32,
        color: Rgb565,
        paint: Paint,
    },
    /// Counter-clockwise from `start_rad` to `end_rad`, 0 at 3 o'clock.
    Arc {
        rect: Rectangle,
        start_rad: f32,
        end_rad: f32,
        color: Rgb565,
    },
    Line {
        from: Point,
        to: Point,
        color: Rgb565,
        width: u32,
    },
    Text {
        font: FontKey,
        pos: Point,
        text: String,
        color: Rgb565,
    },
}

impl Op {
    pub fn color(&self) -> Option<Rgb565> {
        match self {
            Op::Fill(color)
            | Op::RoundedRect { color, .. }
            | Op::Circle { color, .. }
            | Op::Arc { color, .. }
            | Op::Line { color, .. }
            | Op::Text { color, .. } => Some(*color),
        }
    }
}

/// Records every call. Text is measured as a fixed-pitch font:
/// 6×10 small, 9×15 medium, 10×20 large.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<Op>,
}

impl RecordingCanvas {
    pub fn lines_with(&self, color: Rgb565) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Line { color: c, .. } if *c == color))
            .count()
    }

    pub fn has_filled_circle(&self, color: Rgb565) -> bool {
        self.ops.iter().any(|op| {
            matches!(op, Op::Circle { color: c, paint: Paint::Fill, .. } if *c == color)
        })
    }

    /// Filled rectangles with radius 0, i.e. region clears.
    pub fn clears(&self) -> Vec<Rectangle> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::RoundedRect {
                    rect,
                    radius: 0,
                    paint: Paint::Fill,
                    ..
                } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn fill(&mut self, color: Rgb565) {
        self.ops.push(Op::Fill(color));
    }

    fn rounded_rect(&mut self, rect: Rectangle, radius: u32, color: Rgb565, paint: Paint) {
        self.ops.push(Op::RoundedRect {
            rect,
            radius,
            color,
            paint,
        });
    }

    fn circle(&mut self, center: Point, radius: u32, color: Rgb565, paint: Paint) {
        self.ops.push(Op::Circle {
            center,
            radius,
            color,
            paint,
        });
    }

    fn arc(&mut self, rect: Rectangle, start_rad: f32, end_rad: f32, color: Rgb565, _width: u32) {
        self.ops.push(Op::Arc {
            rect,
            start_rad,
            end_rad,
            color,
        });
    }

    fn line(&mut self, from: Point, to: Point, color: Rgb565, width: u32) {
        self.ops.push(Op::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn text(&mut self, font: FontKey, x: i32, y: i32, text: &str, color: Rgb565) {
        self.ops.push(Op::Text {
            font,
            pos: Point::new(x, y),
            text: text.to_string(),
            color,
        });
    }

    fn text_size(&self, font: FontKey, text: &str) -> Size {
        let (w, h) = match font {
            FontKey::Small => (6, 10),
            FontKey::Medium => (9, 15),
            FontKey::Large => (10, 20),
        };
        Size::new(w * text.chars().count() as u32, h)
    }
}
