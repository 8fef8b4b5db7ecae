//! In-memory frame buffer
//!
//! A fixed-size pixel grid that faces render into before the frame is sent
//! to the panel. Implements `DrawTarget` so any embedded-graphics primitive
//! can draw on it.

use core::convert::Infallible;

use dialface_core::Color;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    Pixel,
};

/// Frame buffer of `W` x `H` packed colors
#[derive(Clone)]
pub struct FrameBuffer<const W: usize, const H: usize> {
    rows: [[Color; W]; H],
    /// Whether the buffer changed since the last flush
    dirty: bool,
}

impl<const W: usize, const H: usize> Default for FrameBuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> FrameBuffer<W, H> {
    /// Create a black buffer
    pub const fn new() -> Self {
        Self {
            rows: [[Color::BLACK; W]; H],
            dirty: true,
        }
    }

    pub const fn width(&self) -> usize {
        W
    }

    pub const fn height(&self) -> usize {
        H
    }

    /// Color at a pixel, `None` when out of bounds
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let (x, y) = Self::index(x, y)?;
        Some(self.rows[y][x])
    }

    /// Set one pixel; out-of-bounds writes are discarded
    ///
    /// Returns `true` when the pixel was inside the buffer.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> bool {
        match Self::index(x, y) {
            Some((x, y)) => {
                self.rows[y][x] = color;
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Fill every pixel
    pub fn fill(&mut self, color: Color) {
        for row in &mut self.rows {
            row.fill(color);
        }
        self.dirty = true;
    }

    /// Number of pixels with exactly this color
    pub fn count(&self, color: Color) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == color)
            .count()
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Color; W]> {
        self.rows.iter()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark buffer as clean (after flushing to the panel)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn index(x: i32, y: i32) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < W && y < H).then_some((x, y))
    }
}

impl<const W: usize, const H: usize> DrawTarget for FrameBuffer<W, H> {
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

impl<const W: usize, const H: usize> OriginDimensions for FrameBuffer<W, H> {
    fn size(&self) -> Size {
        Size::new(W as u32, H as u32)
    }
}

#[cfg(feature = "defmt")]
impl<const W: usize, const H: usize> defmt::Format for FrameBuffer<W, H> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "FrameBuffer[{}x{}, dirty={}]", W, H, self.dirty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics_core::geometry::Point;

    #[test]
    fn test_out_of_bounds_is_discarded() {
        let mut fb = FrameBuffer::<4, 3>::new();
        assert!(!fb.set_pixel(-1, 0, Color::WHITE));
        assert!(!fb.set_pixel(4, 0, Color::WHITE));
        assert!(!fb.set_pixel(0, 3, Color::WHITE));
        assert_eq!(fb.count(Color::WHITE), 0);
        assert_eq!(fb.pixel(4, 0), None);
    }

    #[test]
    fn test_draw_iter() {
        let mut fb = FrameBuffer::<4, 3>::new();
        fb.mark_clean();
        let pixels = [
            Pixel(Point::new(1, 1), Color::RED),
            Pixel(Point::new(9, 9), Color::RED),
        ];
        fb.draw_iter(pixels).unwrap();
        assert_eq!(fb.pixel(1, 1), Some(Color::RED));
        assert_eq!(fb.count(Color::RED), 1);
        assert!(fb.is_dirty());
    }

    #[test]
    fn test_clear() {
        let mut fb = FrameBuffer::<4, 3>::new();
        fb.clear(Color::WHITE).unwrap();
        assert_eq!(fb.count(Color::WHITE), 12);
        assert_eq!(fb.size(), Size::new(4, 3));
    }
}
