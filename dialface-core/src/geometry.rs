//! Integer screen geometry
//!
//! Screen coordinates have their origin at the top-left corner with y
//! growing downward.

use crate::angle::Angle;
use crate::trig::{cos, sin, TRIG_SCALE};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A pixel position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by `dx`, `dy`
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Point `distance` pixels from `self` along the ray at `angle`
    ///
    /// 0 points straight up; negative distances point the opposite way.
    pub fn polar(self, angle: Angle, distance: i32) -> Self {
        self.oriented(angle, distance, 0)
    }

    /// Point in a frame rotated to `angle`: `along` pixels along the ray and
    /// `across` pixels to its clockwise side
    pub fn oriented(self, angle: Angle, along: i32, across: i32) -> Self {
        let s = sin(angle);
        let c = cos(angle);
        Self::new(
            self.x + (along * s + across * c) / TRIG_SCALE,
            self.y + (across * s - along * c) / TRIG_SCALE,
        )
    }
}

/// A size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Center point of a rectangle of this size at the origin
    pub const fn center(self) -> Point {
        Point::new(self.width / 2, self.height / 2)
    }

    /// Check whether either dimension is zero or negative
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Rectangle covering a whole screen
    pub const fn screen(size: Size) -> Self {
        Self::new(Point::new(0, 0), size)
    }

    /// Rectangle shrunk by `inset` on every side
    ///
    /// Dimensions never go below zero.
    pub const fn inset(self, inset: i32) -> Self {
        let width = self.size.width - 2 * inset;
        let height = self.size.height - 2 * inset;
        Self::new(
            self.origin.offset(inset, inset),
            Size::new(
                if width > 0 { width } else { 0 },
                if height > 0 { height } else { 0 },
            ),
        )
    }

    /// Center point
    pub const fn center(self) -> Point {
        self.origin.offset(self.size.width / 2, self.size.height / 2)
    }
}

/// Integer square root, rounded down
pub const fn isqrt(value: u64) -> u64 {
    if value < 2 {
        return value;
    }
    let mut x = value / 2 + 1;
    let mut y = (x + value / x) / 2;
    while y < x {
        x = y;
        y = (x + value / x) / 2;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::{HALF_TURN, QUARTER_TURN};

    #[test]
    fn test_polar_cardinals() {
        let center = Point::new(72, 84);
        assert_eq!(center.polar(Angle::ZERO, 50), Point::new(72, 34));
        assert_eq!(center.polar(Angle::from_raw(QUARTER_TURN), 50), Point::new(122, 84));
        assert_eq!(center.polar(Angle::from_raw(HALF_TURN), 50), Point::new(72, 134));
        assert_eq!(center.polar(Angle::ZERO, -16), Point::new(72, 100));
    }

    #[test]
    fn test_oriented_clockwise_side() {
        // At 12 o'clock the clockwise side is to the right
        let center = Point::new(0, 0);
        assert_eq!(center.oriented(Angle::ZERO, 10, 3), Point::new(3, -10));
        // At 3 o'clock it is downward
        assert_eq!(
            center.oriented(Angle::from_raw(QUARTER_TURN), 10, 3),
            Point::new(10, 3)
        );
    }

    #[test]
    fn test_rect_inset() {
        let rect = Rect::screen(Size::new(144, 168)).inset(10);
        assert_eq!(rect.origin, Point::new(10, 10));
        assert_eq!(rect.size, Size::new(124, 148));
        assert_eq!(rect.center(), Point::new(72, 84));
    }

    #[test]
    fn test_rect_inset_never_negative() {
        let rect = Rect::screen(Size::new(20, 30)).inset(12);
        assert_eq!(rect.size, Size::new(0, 6));
        assert!(rect.size.is_empty());
    }

    #[test]
    fn test_isqrt() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(15), 3);
        assert_eq!(isqrt(16), 4);
        assert_eq!(isqrt(62 * 62 + 74 * 74), 96);
        assert_eq!(isqrt(u32::MAX as u64), 65535);
        assert_eq!(isqrt(u64::MAX), u32::MAX as u64);
    }
}
