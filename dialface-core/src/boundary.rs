//! Boundary projection
//!
//! Answers "how far from the center does a ray at this angle travel before
//! it leaves the shape". Circular shapes are trivial; rectangular ones solve
//! the ray against the nearer pair of edges in fixed point.

use crate::angle::Angle;
use crate::config::ScreenShape;
use crate::geometry::{isqrt, Point, Rect, Size};
use crate::trig::{cos, sin, TRIG_EPSILON, TRIG_SCALE};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Distance from the center of a box with half extents `hx`, `hy` to its
/// edge along the ray at `angle`
///
/// Half extents below 1 are raised to 1. A ray component within
/// [`TRIG_EPSILON`] of zero never reaches that pair of edges, so the other
/// pair decides.
pub fn ray_to_box(hx: i32, hy: i32, angle: Angle) -> i32 {
    let hx = hx.max(1) as i64;
    let hy = hy.max(1) as i64;
    // Clock frame: horizontal component is sin, vertical is cos
    let horizontal = sin(angle).abs();
    let vertical = cos(angle).abs();

    let to_side = if horizontal > TRIG_EPSILON {
        hx * TRIG_SCALE as i64 / horizontal as i64
    } else {
        i64::MAX
    };
    let to_top = if vertical > TRIG_EPSILON {
        hy * TRIG_SCALE as i64 / vertical as i64
    } else {
        i64::MAX
    };

    to_side.min(to_top).min(i32::MAX as i64) as i32
}

/// Outline a ray can be projected onto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoundaryShape {
    /// Circle around `center`
    Circle { center: Point, radius: i32 },
    /// Rectangle `bounds` shrunk by `inset` on every side
    RoundedRect { bounds: Rect, inset: i32 },
}

impl BoundaryShape {
    /// Outline of a whole screen
    pub fn for_screen(size: Size, shape: ScreenShape) -> Self {
        match shape {
            ScreenShape::Round => BoundaryShape::Circle {
                center: size.center(),
                radius: size.width.min(size.height) / 2,
            },
            ScreenShape::Rect => BoundaryShape::RoundedRect {
                bounds: Rect::screen(size),
                inset: 0,
            },
        }
    }

    /// Center the rays start from
    pub fn center(&self) -> Point {
        match *self {
            BoundaryShape::Circle { center, .. } => center,
            BoundaryShape::RoundedRect { bounds, .. } => bounds.center(),
        }
    }

    fn half_extents(bounds: Rect, inset: i32) -> (i32, i32) {
        (
            (bounds.size.width / 2 - inset).max(1),
            (bounds.size.height / 2 - inset).max(1),
        )
    }

    /// Upper bound of [`distance_to_boundary`](Self::distance_to_boundary)
    ///
    /// The radius for circles, the half diagonal (rounded up) for rectangles.
    pub fn max_distance(&self) -> u32 {
        match *self {
            BoundaryShape::Circle { radius, .. } => radius.max(0) as u32,
            BoundaryShape::RoundedRect { bounds, inset } => {
                let (hx, hy) = Self::half_extents(bounds, inset);
                let (hx, hy) = (hx as u64, hy as u64);
                let squared = hx * hx + hy * hy;
                let root = isqrt(squared);
                let root = if root * root == squared { root } else { root + 1 };
                root.min(u32::MAX as u64) as u32
            }
        }
    }

    /// Distance from the center to the outline along the ray at `angle`
    pub fn distance_to_boundary(&self, angle: Angle) -> u32 {
        match *self {
            BoundaryShape::Circle { radius, .. } => radius.max(0) as u32,
            BoundaryShape::RoundedRect { bounds, inset } => {
                let (hx, hy) = Self::half_extents(bounds, inset);
                let distance = ray_to_box(hx, hy, angle).max(0) as u32;
                distance.min(self.max_distance())
            }
        }
    }

    /// Point `distance` pixels from the center along the ray at `angle`
    pub fn point_at(&self, angle: Angle, distance: i32) -> Point {
        self.center().polar(angle, distance)
    }

    /// Point where the ray at `angle` meets the outline
    ///
    /// Rectangle edges are exclusive, so the point is pulled back onto the
    /// last row or column inside `bounds`.
    pub fn project(&self, angle: Angle) -> Point {
        let point = self.point_at(angle, self.distance_to_boundary(angle) as i32);
        match *self {
            BoundaryShape::Circle { .. } => point,
            BoundaryShape::RoundedRect { bounds, .. } => {
                let Point { x: left, y: top } = bounds.origin;
                let right = left + (bounds.size.width - 1).max(0);
                let bottom = top + (bounds.size.height - 1).max(0);
                Point::new(point.x.min(right).max(left), point.y.min(bottom).max(top))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::{FULL_TURN, HALF_TURN, QUARTER_TURN};
    use proptest::prelude::*;

    fn pebble_rect(inset: i32) -> BoundaryShape {
        BoundaryShape::RoundedRect {
            bounds: Rect::screen(Size::new(144, 168)),
            inset,
        }
    }

    #[test]
    fn test_rect_cardinal_distances() {
        let shape = pebble_rect(10);
        assert_eq!(shape.distance_to_boundary(Angle::ZERO), 74);
        assert_eq!(shape.distance_to_boundary(Angle::from_raw(QUARTER_TURN)), 62);
        assert_eq!(shape.distance_to_boundary(Angle::from_raw(HALF_TURN)), 74);
        assert_eq!(shape.distance_to_boundary(Angle::from_raw(3 * QUARTER_TURN)), 62);
    }

    #[test]
    fn test_rect_corner_reaches_diagonal() {
        let shape = pebble_rect(0);
        // At 45 degrees the ray leaves through the right edge, about 101.8px out
        let corner = shape.distance_to_boundary(Angle::from_raw(FULL_TURN / 8));
        assert!((72..=shape.max_distance()).contains(&corner));
    }

    #[test]
    fn test_circle_ignores_angle() {
        let shape = BoundaryShape::Circle {
            center: Point::new(90, 90),
            radius: 88,
        };
        for raw in (0..FULL_TURN).step_by(997) {
            assert_eq!(shape.distance_to_boundary(Angle::from_raw(raw)), 88);
        }
    }

    #[test]
    fn test_degenerate_inset_is_clamped() {
        // Inset larger than half the screen collapses to a 1px box
        let shape = pebble_rect(500);
        assert_eq!(shape.distance_to_boundary(Angle::ZERO), 1);
        assert_eq!(shape.max_distance(), 2);
    }

    #[test]
    fn test_project_onto_screen_edge() {
        let shape = BoundaryShape::for_screen(Size::new(144, 168), ScreenShape::Rect);
        assert_eq!(shape.project(Angle::ZERO), Point::new(72, 0));
        assert_eq!(shape.project(Angle::from_raw(QUARTER_TURN)), Point::new(143, 84));
        assert_eq!(shape.project(Angle::from_raw(HALF_TURN)), Point::new(72, 167));
        assert_eq!(shape.project(Angle::from_raw(3 * QUARTER_TURN)), Point::new(0, 84));
    }

    #[test]
    fn test_max_distance_on_huge_bounds() {
        let shape = BoundaryShape::RoundedRect {
            bounds: Rect::screen(Size::new(200_000, 200_000)),
            inset: 0,
        };
        // sqrt(2 * 100000^2) is about 141421.36
        assert_eq!(shape.max_distance(), 141_422);
        assert_eq!(shape.distance_to_boundary(Angle::ZERO), 100_000);
    }

    #[test]
    fn test_round_screen_outline() {
        let shape = BoundaryShape::for_screen(Size::new(180, 180), ScreenShape::Round);
        assert_eq!(
            shape,
            BoundaryShape::Circle {
                center: Point::new(90, 90),
                radius: 90
            }
        );
    }

    #[test]
    fn test_ray_to_box_per_axis() {
        assert_eq!(ray_to_box(40, 60, Angle::ZERO), 60);
        assert_eq!(ray_to_box(40, 60, Angle::from_raw(QUARTER_TURN)), 40);
        assert_eq!(ray_to_box(0, -5, Angle::ZERO), 1);
    }

    proptest! {
        #[test]
        fn test_distance_within_clamp(raw in 0i32..FULL_TURN, inset in -20i32..120) {
            let shape = pebble_rect(inset);
            let distance = shape.distance_to_boundary(Angle::from_raw(raw));
            prop_assert!(distance <= shape.max_distance());
        }

        #[test]
        fn test_distance_decreases_with_inset(raw in 0i32..FULL_TURN, inset in 0i32..70) {
            let angle = Angle::from_raw(raw);
            prop_assert!(
                pebble_rect(inset).distance_to_boundary(angle)
                    >= pebble_rect(inset + 1).distance_to_boundary(angle)
            );
        }

        #[test]
        fn test_distance_is_continuous(raw in 0i32..FULL_TURN) {
            let shape = pebble_rect(10);
            let here = shape.distance_to_boundary(Angle::from_raw(raw)) as i32;
            let next = shape.distance_to_boundary(Angle::from_raw(raw + 16)) as i32;
            prop_assert!((here - next).abs() <= 3);
        }
    }
}
