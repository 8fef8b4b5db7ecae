//! embedded-graphics integration
//!
//! Lets any `DrawTarget<Color = Color>` receive frames.

use embedded_graphics_core::pixelcolor::raw::{RawData, RawU8};
use embedded_graphics_core::pixelcolor::PixelColor;

use crate::color::Color;

impl PixelColor for Color {
    type Raw = RawU8;
}

impl From<RawU8> for Color {
    /// Raw data carries no transparency; the alpha bits are forced opaque
    fn from(raw: RawU8) -> Self {
        Color::from_channels(raw.into_inner() >> 4, raw.into_inner() >> 2, raw.into_inner())
    }
}

impl From<Color> for RawU8 {
    fn from(color: Color) -> Self {
        RawU8::new(color.argb())
    }
}
