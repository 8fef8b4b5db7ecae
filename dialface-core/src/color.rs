//! Display colors
//!
//! Colors are packed into one byte, two bits per channel in `AARRGGBB`
//! order, which is the native palette of the target displays.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A packed 8-bit ARGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color(u8);

impl Color {
    pub const BLACK: Color = Color(0b11_00_00_00);
    pub const WHITE: Color = Color(0b11_11_11_11);
    pub const DARK_GRAY: Color = Color(0b11_01_01_01);
    pub const LIGHT_GRAY: Color = Color(0b11_10_10_10);
    pub const RED: Color = Color(0b11_11_00_00);
    pub const DARK_CANDY_APPLE_RED: Color = Color(0b11_10_00_00);
    pub const MALACHITE: Color = Color(0b11_00_11_01);

    /// Build a color from 2-bit channels
    pub const fn from_channels(red: u8, green: u8, blue: u8) -> Self {
        Color(0b11_00_00_00 | (red & 0b11) << 4 | (green & 0b11) << 2 | (blue & 0b11))
    }

    /// Convert a packed `0xRRGGBB` value, keeping the top two bits of each
    /// channel
    ///
    /// Negative values and values above `0xFFFFFF` are malformed.
    pub const fn from_hex(hex: i32) -> Option<Self> {
        if hex < 0 || hex > 0xFF_FF_FF {
            return None;
        }
        let red = (hex >> 16) as u8 >> 6;
        let green = (hex >> 8) as u8 >> 6;
        let blue = hex as u8 >> 6;
        Some(Self::from_channels(red, green, blue))
    }

    /// Unpack a stored byte; transparent values are rejected
    pub const fn from_argb(argb: u8) -> Option<Self> {
        if argb & 0b11_00_00_00 == 0b11_00_00_00 {
            Some(Color(argb))
        } else {
            None
        }
    }

    /// Packed `AARRGGBB` byte
    pub const fn argb(self) -> u8 {
        self.0
    }

    /// Expand to a `0xRRGGBB` value
    pub const fn to_hex(self) -> u32 {
        let red = ((self.0 >> 4) & 0b11) as u32 * 0x55;
        let green = ((self.0 >> 2) & 0b11) as u32 * 0x55;
        let blue = (self.0 & 0b11) as u32 * 0x55;
        red << 16 | green << 8 | blue
    }

    /// Inverted counterpart within the grayscale palette
    ///
    /// Black and white swap, dark and light gray swap. Every other color is
    /// its own inverse.
    pub const fn inverted(self) -> Self {
        match self {
            Color::BLACK => Color::WHITE,
            Color::WHITE => Color::BLACK,
            Color::DARK_GRAY => Color::LIGHT_GRAY,
            Color::LIGHT_GRAY => Color::DARK_GRAY,
            other => other,
        }
    }

    /// Two-tone contrast: white on black, black on anything else
    pub const fn contrast(self) -> Self {
        match self {
            Color::BLACK => Color::WHITE,
            _ => Color::BLACK,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_hex_palette() {
        assert_eq!(Color::from_hex(0x000000), Some(Color::BLACK));
        assert_eq!(Color::from_hex(0xFFFFFF), Some(Color::WHITE));
        assert_eq!(Color::from_hex(0x555555), Some(Color::DARK_GRAY));
        assert_eq!(Color::from_hex(0xAAAAAA), Some(Color::LIGHT_GRAY));
        assert_eq!(Color::from_hex(0xFF0000), Some(Color::RED));
        assert_eq!(Color::from_hex(0x00FF55), Some(Color::MALACHITE));
    }

    #[test]
    fn test_from_hex_truncates_channels() {
        // 0x8E -> 2, 0xE6 -> 3, 0x9E -> 2
        assert_eq!(Color::from_hex(0x8EE69E), Some(Color::from_channels(2, 3, 2)));
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        assert_eq!(Color::from_hex(-1), None);
        assert_eq!(Color::from_hex(0x1000000), None);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::WHITE.to_hex(), 0xFFFFFF);
        assert_eq!(Color::DARK_CANDY_APPLE_RED.to_hex(), 0xAA0000);
    }

    #[test]
    fn test_from_argb_rejects_transparent() {
        assert_eq!(Color::from_argb(0xFF), Some(Color::WHITE));
        assert_eq!(Color::from_argb(0x3F), None);
    }

    #[test]
    fn test_inversion_pairs() {
        assert_eq!(Color::BLACK.inverted(), Color::WHITE);
        assert_eq!(Color::DARK_GRAY.inverted(), Color::LIGHT_GRAY);
        assert_eq!(Color::RED.inverted(), Color::RED);
        assert_eq!(Color::MALACHITE.inverted(), Color::MALACHITE);
    }

    #[test]
    fn test_contrast() {
        assert_eq!(Color::BLACK.contrast(), Color::WHITE);
        assert_eq!(Color::WHITE.contrast(), Color::BLACK);
        assert_eq!(Color::RED.contrast(), Color::BLACK);
    }

    proptest! {
        #[test]
        fn test_inversion_is_involution(red in 0u8..4, green in 0u8..4, blue in 0u8..4) {
            let color = Color::from_channels(red, green, blue);
            prop_assert_eq!(color.inverted().inverted(), color);
        }
    }
}
