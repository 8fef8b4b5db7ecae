//! Numeral glyph placement
//!
//! Glyph images come from a resource collaborator; layout only needs their
//! pixel size.

use crate::angle::Angle;
use crate::boundary::ray_to_box;
use crate::config::ScreenShape;
use crate::geometry::{Point, Rect, Size};

/// Numerals a face can print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Numeral {
    Two,
    Six,
    Ten,
}

impl Numeral {
    /// Hour position the numeral marks
    pub const fn hour(self) -> u8 {
        match self {
            Numeral::Two => 2,
            Numeral::Six => 6,
            Numeral::Ten => 10,
        }
    }
}

/// Ink variant of a glyph image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GlyphTone {
    /// Dark ink for light backgrounds
    Dark,
    /// Light ink for dark backgrounds
    Light,
}

impl GlyphTone {
    /// Tone matching the theme's inversion
    pub const fn for_inverted(invert: bool) -> Self {
        if invert {
            GlyphTone::Light
        } else {
            GlyphTone::Dark
        }
    }
}

/// Corner radius of glyph backing plates
pub const PLATE_CORNER_RADIUS: u32 = 2;

/// Where a glyph goes on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GlyphAnchor {
    /// Centered on the numeral's hour ray, with the image kept `margin`
    /// pixels inside the screen edge
    Radial {
        numeral: Numeral,
        screen: Size,
        shape: ScreenShape,
        margin: i32,
    },
    /// Horizontally centered, `margin` pixels above the bottom edge
    Bottom {
        numeral: Numeral,
        screen: Size,
        margin: i32,
    },
}

/// Resolved glyph layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlyphPlacement {
    /// Where the image is drawn
    pub image: Rect,
    /// Backing plate filled before the image
    pub plate: Rect,
}

impl GlyphAnchor {
    pub const fn numeral(&self) -> Numeral {
        match *self {
            GlyphAnchor::Radial { numeral, .. } | GlyphAnchor::Bottom { numeral, .. } => numeral,
        }
    }

    /// Lay out a glyph of the given size
    pub fn place(&self, glyph: Size) -> GlyphPlacement {
        match *self {
            GlyphAnchor::Radial {
                numeral,
                screen,
                shape,
                margin,
            } => {
                let angle = Angle::hour_mark(numeral.hour());
                let center = screen.center();
                let distance = match shape {
                    ScreenShape::Round => screen.width / 2 - margin - glyph.width / 2,
                    ScreenShape::Rect => ray_to_box(
                        screen.width / 2 - margin - glyph.width / 2,
                        screen.height / 2 - margin - glyph.height / 2,
                        angle,
                    ),
                };
                let middle = center.polar(angle, distance);
                let origin = middle.offset(-glyph.width / 2, -glyph.height / 2);
                let image = Rect::new(origin, glyph);
                GlyphPlacement {
                    image,
                    plate: image.inset(2),
                }
            }
            GlyphAnchor::Bottom { screen, margin, .. } => {
                let center_x = screen.width / 2;
                let top = screen.height - glyph.height - margin;
                let image = Rect::new(Point::new(center_x - glyph.width / 2, top), glyph);
                let plate_width = (glyph.width - 4).max(0);
                let plate = Rect::new(
                    Point::new(center_x - plate_width / 2, top - 4),
                    Size::new(plate_width, glyph.height + 8),
                );
                GlyphPlacement { image, plate }
            }
        }
    }
}
