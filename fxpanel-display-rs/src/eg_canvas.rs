//! [`Canvas`] backed by any embedded-graphics RGB565 draw target.
//!
//! [`EgCanvas`] owns the target, the same way a panel driver owns its bus,
//! and hands it back through [`EgCanvas::target_mut()`] or
//! [`EgCanvas::into_inner()`] for flushing.

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10, FONT_9X15_BOLD};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Arc, Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle,
    StrokeAlignment,
};
use embedded_graphics::text::{Baseline, Text};

use crate::canvas::{Canvas, FontKey, Paint};
use crate::error::CanvasFault;

/// Concrete font for each [`FontKey`].
pub fn mono_font(font: FontKey) -> &'static MonoFont<'static> {
    match font {
        FontKey::Small => &FONT_6X10,
        FontKey::Medium => &FONT_9X15_BOLD,
        FontKey::Large => &FONT_10X20,
    }
}

fn shape_style(color: Rgb565, paint: Paint) -> PrimitiveStyle<Rgb565> {
    match paint {
        Paint::Fill => PrimitiveStyle::with_fill(color),
        Paint::Stroke(width) => PrimitiveStyleBuilder::new()
            .stroke_color(color)
            .stroke_width(width)
            .stroke_alignment(StrokeAlignment::Inside)
            .build(),
    }
}

/// Drawing adapter over a [`DrawTarget`].
///
/// Draw errors do not abort a frame. The first one is kept as a
/// [`CanvasFault`] and every one is counted; poll
/// [`take_fault()`](Self::take_fault) after rendering.
pub struct EgCanvas<D> {
    target: D,
    fault: Option<CanvasFault>,
    fault_count: u32,
}

impl<D> EgCanvas<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: D) -> Self {
        Self {
            target,
            fault: None,
            fault_count: 0,
        }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }

    /// Return the pending fault, if any, and clear it.
    pub fn take_fault(&mut self) -> Option<CanvasFault> {
        self.fault.take()
    }

    /// Total draw errors since construction.
    pub fn fault_count(&self) -> u32 {
        self.fault_count
    }

    fn record<T>(&mut self, result: Result<T, D::Error>) {
        if result.is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("draw target rejected a primitive");
            self.fault_count = self.fault_count.saturating_add(1);
            self.fault.get_or_insert(CanvasFault::Draw);
        }
    }
}

impl<D> Canvas for EgCanvas<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn fill(&mut self, color: Rgb565) {
        let result = self.target.clear(color);
        self.record(result);
    }

    fn rounded_rect(&mut self, rect: Rectangle, radius: u32, color: Rgb565, paint: Paint) {
        let style = shape_style(color, paint);
        let result = if radius == 0 {
            rect.into_styled(style).draw(&mut self.target)
        } else {
            RoundedRectangle::with_equal_corners(rect, Size::new(radius, radius))
                .into_styled(style)
                .draw(&mut self.target)
        };
        self.record(result);
    }

    fn circle(&mut self, center: Point, radius: u32, color: Rgb565, paint: Paint) {
        let result = Circle::with_center(center, radius * 2)
            .into_styled(shape_style(color, paint))
            .draw(&mut self.target);
        self.record(result);
    }

    fn arc(&mut self, rect: Rectangle, start_rad: f32, end_rad: f32, color: Rgb565, width: u32) {
        // embedded-graphics measures angles clockwise (y down); mirror the
        // counter-clockwise span so it starts at -end and sweeps forward.
        let diameter = rect.size.width.min(rect.size.height);
        let result = Arc::new(
            rect.top_left,
            diameter,
            Angle::from_radians(-end_rad),
            Angle::from_radians(end_rad - start_rad),
        )
        .into_styled(PrimitiveStyle::with_stroke(color, width))
        .draw(&mut self.target);
        self.record(result);
    }

    fn line(&mut self, from: Point, to: Point, color: Rgb565, width: u32) {
        let result = Line::new(from, to)
            .into_styled(PrimitiveStyle::with_stroke(color, width))
            .draw(&mut self.target);
        self.record(result);
    }

    fn text(&mut self, font: FontKey, x: i32, y: i32, text: &str, color: Rgb565) {
        let style = MonoTextStyle::new(mono_font(font), color);
        let result =
            Text::with_baseline(text, Point::new(x, y), style, Baseline::Top).draw(&mut self.target);
        self.record(result);
    }

    fn text_size(&self, font: FontKey, text: &str) -> Size {
        let font = mono_font(font);
        let n = text.chars().count() as u32;
        let width = n * font.character_size.width + n.saturating_sub(1) * font.character_spacing;
        Size::new(width, font.character_size.height)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
