//! Display capability descriptors
//!
//! Resolved once at startup and passed by reference to everything that
//! depends on the screen's shape or color depth.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::Size;

/// Physical outline of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScreenShape {
    Round,
    Rect,
}

/// Color depth of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorDepth {
    /// 64-color palette
    Color,
    /// Black and white only
    Mono,
}

/// What the screen can do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayCaps {
    pub shape: ScreenShape,
    pub depth: ColorDepth,
}

impl DisplayCaps {
    pub const fn new(shape: ScreenShape, depth: ColorDepth) -> Self {
        Self { shape, depth }
    }

    pub const fn is_round(&self) -> bool {
        matches!(self.shape, ScreenShape::Round)
    }

    pub const fn is_mono(&self) -> bool {
        matches!(self.depth, ColorDepth::Mono)
    }
}

/// Screen size together with its capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayProfile {
    pub size: Size,
    pub caps: DisplayCaps,
}

impl DisplayProfile {
    /// 144x168 black and white
    pub const RECT_MONO: DisplayProfile = DisplayProfile::new(144, 168, ScreenShape::Rect, ColorDepth::Mono);
    /// 144x168 color
    pub const RECT_COLOR: DisplayProfile = DisplayProfile::new(144, 168, ScreenShape::Rect, ColorDepth::Color);
    /// 180x180 round color
    pub const ROUND_COLOR: DisplayProfile = DisplayProfile::new(180, 180, ScreenShape::Round, ColorDepth::Color);
    /// 200x228 color
    pub const LARGE_RECT_COLOR: DisplayProfile =
        DisplayProfile::new(200, 228, ScreenShape::Rect, ColorDepth::Color);

    pub const fn new(width: i32, height: i32, shape: ScreenShape, depth: ColorDepth) -> Self {
        Self {
            size: Size::new(width, height),
            caps: DisplayCaps::new(shape, depth),
        }
    }
}
