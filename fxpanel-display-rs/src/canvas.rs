//! Drawing sink used by the screen renderer.
//!
//! All coordinates are in the logical display's own pixel space, y down.
//! Text positions are the top-left corner of the text box.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

/// Logical font sizes. Backends map each key to a concrete font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontKey {
    Small,
    Medium,
    Large,
}

/// How a closed shape is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Paint {
    Fill,
    /// Outline of the given width, drawn inside the shape's bounds.
    Stroke(u32),
}

pub trait Canvas {
    /// Paint the whole surface.
    fn fill(&mut self, color: Rgb565);

    fn rounded_rect(&mut self, rect: Rectangle, radius: u32, color: Rgb565, paint: Paint);

    fn circle(&mut self, center: Point, radius: u32, color: Rgb565, paint: Paint);

    /// Counter-clockwise arc from `start_rad` to `end_rad` (0 = 3 o'clock)
    /// on the ellipse inscribed in `rect`.
    fn arc(&mut self, rect: Rectangle, start_rad: f32, end_rad: f32, color: Rgb565, width: u32);

    fn line(&mut self, from: Point, to: Point, color: Rgb565, width: u32);

    fn text(&mut self, font: FontKey, x: i32, y: i32, text: &str, color: Rgb565);

    fn text_size(&self, font: FontKey, text: &str) -> Size;

    /// Flat fill of `rect`. Used to clear a region before it is redrawn.
    fn clear_rect(&mut self, rect: Rectangle, color: Rgb565) {
        self.rounded_rect(rect, 0, color, Paint::Fill);
    }
}
