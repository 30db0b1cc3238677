//! In-memory RGB565 framebuffer standing in for the panel.

use std::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Row-major RGB565 pixels. Writes outside the buffer are clipped.
pub struct Framebuffer {
    size: Size,
    pixels: Vec<Rgb565>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            pixels: vec![Rgb565::BLACK; (width * height) as usize],
        }
    }

    fn index(&self, p: Point) -> Option<usize> {
        let (w, h) = (self.size.width as i32, self.size.height as i32);
        if p.x < 0 || p.y < 0 || p.x >= w || p.y >= h {
            return None;
        }
        Some((p.y * w + p.x) as usize)
    }

    /// Number of pixels equal to `color`.
    pub fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    /// FNV-1a over the raw pixel words, for comparing frames in logs.
    pub fn checksum(&self) -> u32 {
        self.pixels.iter().fold(0x811c_9dc5_u32, |hash, &c| {
            (hash ^ u32::from(c.into_storage())).wrapping_mul(0x0100_0193)
        })
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = self.index(point) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    #[test]
    fn clips_out_of_bounds_pixels() {
        let mut fb = Framebuffer::new(4, 4);
        Rectangle::new(Point::new(2, 2), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
            .draw(&mut fb)
            .unwrap();
        assert_eq!(fb.count(Rgb565::RED), 4);
        assert_eq!(fb.count(Rgb565::BLACK), 12);
    }

    #[test]
    fn checksum_tracks_content() {
        let mut fb = Framebuffer::new(8, 8);
        let blank = fb.checksum();
        fb.clear(Rgb565::WHITE).unwrap();
        assert_ne!(fb.checksum(), blank);
        fb.clear(Rgb565::BLACK).unwrap();
        assert_eq!(fb.checksum(), blank);
    }
}
