//! Glyph image sources
//!
//! The compositor asks a [`GlyphSource`] for numeral images. Platforms with
//! bitmap resources implement the trait over them; [`DigitGlyphs`] draws the
//! numerals from a small built-in digit font.

use dialface_core::face::{GlyphTone, Numeral};
use dialface_core::geometry::Size;
use dialface_core::Color;

/// Numeral image provider
pub trait GlyphSource {
    /// Image size, `None` when the glyph is unavailable
    fn size(&self, numeral: Numeral, tone: GlyphTone) -> Option<Size>;

    /// Color at `(x, y)` inside the image, `None` for transparent
    fn pixel(&self, numeral: Numeral, tone: GlyphTone, x: i32, y: i32) -> Option<Color>;
}

impl<T: GlyphSource + ?Sized> GlyphSource for &T {
    fn size(&self, numeral: Numeral, tone: GlyphTone) -> Option<Size> {
        (**self).size(numeral, tone)
    }

    fn pixel(&self, numeral: Numeral, tone: GlyphTone, x: i32, y: i32) -> Option<Color> {
        (**self).pixel(numeral, tone, x, y)
    }
}

/// Source with no glyphs; every glyph layer is skipped
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGlyphs;

impl GlyphSource for NoGlyphs {
    fn size(&self, _numeral: Numeral, _tone: GlyphTone) -> Option<Size> {
        None
    }

    fn pixel(&self, _numeral: Numeral, _tone: GlyphTone, _x: i32, _y: i32) -> Option<Color> {
        None
    }
}

const DIGIT_WIDTH: i32 = 5;
const DIGIT_HEIGHT: i32 = 7;
/// Digit cell including the one-column gap
const DIGIT_ADVANCE: i32 = DIGIT_WIDTH + 1;

/// 5x7 rows, bit 4 is the leftmost column
#[rustfmt::skip]
const FONT: [[u8; 7]; 4] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // 0
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // 1
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F], // 2
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // 6
];

/// Font rows for each digit of a numeral
const fn digits(numeral: Numeral) -> &'static [usize] {
    match numeral {
        Numeral::Two => &[2],
        Numeral::Six => &[3],
        Numeral::Ten => &[1, 0],
    }
}

/// Numerals from the built-in 5x7 digit font, scaled by an integer factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitGlyphs {
    scale: i32,
}

impl DigitGlyphs {
    /// Scale of at least 1
    pub const fn new(scale: u8) -> Self {
        let scale = if scale == 0 { 1 } else { scale as i32 };
        Self { scale }
    }

    const fn ink(tone: GlyphTone) -> Color {
        match tone {
            GlyphTone::Dark => Color::BLACK,
            GlyphTone::Light => Color::WHITE,
        }
    }
}

impl Default for DigitGlyphs {
    fn default() -> Self {
        Self::new(2)
    }
}

impl GlyphSource for DigitGlyphs {
    fn size(&self, numeral: Numeral, _tone: GlyphTone) -> Option<Size> {
        let count = digits(numeral).len() as i32;
        Some(Size::new(
            (count * DIGIT_ADVANCE - 1) * self.scale,
            DIGIT_HEIGHT * self.scale,
        ))
    }

    fn pixel(&self, numeral: Numeral, tone: GlyphTone, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 {
            return None;
        }
        let column = x / self.scale;
        let row = (y / self.scale) as usize;
        let within = column % DIGIT_ADVANCE;
        if within >= DIGIT_WIDTH {
            return None;
        }

        let digit = *digits(numeral).get((column / DIGIT_ADVANCE) as usize)?;
        let bits = *FONT[digit].get(row)?;
        let set = bits >> (DIGIT_WIDTH - 1 - within) & 1 == 1;
        set.then_some(Self::ink(tone))
    }
}
