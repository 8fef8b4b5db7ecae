//! Draw layer model
//!
//! A face is an ordered list of [`Layer`]s; list position is z-order. Layers
//! are plain data produced by a face variant. They name colors by role and
//! hands by reference so the same list renders any time of day.

use heapless::Vec;

use crate::angle::{Angle, HandAngles};
use crate::boundary::BoundaryShape;
use crate::face::glyph::GlyphAnchor;
use crate::geometry::{Point, Rect};
use crate::palette::ColorRole;

/// Maximum layers in one face
pub const MAX_LAYERS: usize = 16;

/// Ordered layer list
pub type LayerList = Vec<Layer, MAX_LAYERS>;

/// Which direction a hand-bound layer points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HandRef {
    Hour,
    Minute,
    /// A fixed direction, independent of time
    Fixed(Angle),
}

impl HandRef {
    /// Current direction
    pub fn angle(self, hands: &HandAngles) -> Angle {
        match self {
            HandRef::Hour => hands.hour,
            HandRef::Minute => hands.minute,
            HandRef::Fixed(angle) => angle,
        }
    }
}

/// A set of hour positions on a 12-hour dial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HourSet(u16);

impl HourSet {
    const ALL_BITS: u16 = 0x0FFF;

    pub const fn empty() -> Self {
        HourSet(0)
    }

    pub const fn all() -> Self {
        HourSet(Self::ALL_BITS)
    }

    /// Set containing the given hours (taken modulo 12)
    pub const fn of(hours: &[u8]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < hours.len() {
            bits |= 1 << (hours[i] % 12);
            i += 1;
        }
        HourSet(bits)
    }

    /// Every hour not in this set
    pub const fn complement(self) -> Self {
        HourSet(!self.0 & Self::ALL_BITS)
    }

    pub const fn contains(self, hour: u8) -> bool {
        self.0 & (1 << (hour % 12)) != 0
    }

    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Hours in the set, ascending
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0u8..12).filter(move |&hour| self.contains(hour))
    }
}

/// Filled region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Area {
    /// Whole screen
    Screen,
    Circle { center: Point, radius: i32 },
    RoundedRect { rect: Rect, corner_radius: u32 },
}

/// Stroked outline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outline {
    Circle { center: Point, radius: i32 },
    /// Rectangular frame drawn inward from the edge of `rect`
    Frame { rect: Rect },
}

/// Radial extent of a marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MarkerSpan {
    /// Fixed radii from the center
    Fixed { inner: i32, outer: i32 },
    /// Between two insets of a rectangle, measured along the marker's ray,
    /// each adjusted by a cosmetic offset
    Band {
        bounds: Rect,
        inner_inset: i32,
        outer_inset: i32,
        inner_offset: i32,
        outer_offset: i32,
    },
}

impl MarkerSpan {
    /// Inner and outer radius along `angle`
    ///
    /// The inner radius is never negative and the outer radius never lies
    /// inside the inner one.
    pub fn resolve(&self, angle: Angle) -> (i32, i32) {
        let (inner, outer) = match *self {
            MarkerSpan::Fixed { inner, outer } => (inner, outer),
            MarkerSpan::Band {
                bounds,
                inner_inset,
                outer_inset,
                inner_offset,
                outer_offset,
            } => {
                let reach = |inset| {
                    BoundaryShape::RoundedRect { bounds, inset }.distance_to_boundary(angle) as i32
                };
                (
                    reach(inner_inset) + inner_offset,
                    reach(outer_inset) + outer_offset,
                )
            }
        };
        let inner = inner.max(0);
        (inner, outer.max(inner))
    }
}

/// One-sided strip along a marker's clockwise edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MarkerEdge {
    pub width: i32,
    pub role: ColorRole,
}

/// One draw operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    /// Solid fill
    Fill { area: Area, role: ColorRole },
    /// Stroked outline
    Stroke {
        outline: Outline,
        width: u32,
        role: ColorRole,
    },
    /// Disc split at 12 o'clock and the hour hand into a light and a dark
    /// region, with the minute hand stroked in whichever color contrasts the
    /// region it lies over
    RadialSplit {
        center: Point,
        radius: i32,
        /// Minute hand runs from `radius` inward to this distance
        hand_reach: i32,
        hand_width: u32,
    },
    /// Flat-ended bar along a hand direction
    Marker {
        hand: HandRef,
        span: MarkerSpan,
        thickness: i32,
        role: ColorRole,
        edge: Option<MarkerEdge>,
    },
    /// Straight stroke along a hand direction between two distances from
    /// `center`; negative distances extend behind the center
    HandLine {
        hand: HandRef,
        center: Point,
        from: i32,
        to: i32,
        width: u32,
        role: ColorRole,
    },
    /// Lines from the outline's center to the outline at each hour
    Spokes {
        hours: HourSet,
        outline: BoundaryShape,
        width: u32,
        role: ColorRole,
    },
    /// Filled dots where each hour's ray meets the outline
    Dots {
        hours: HourSet,
        outline: BoundaryShape,
        radius: i32,
        role: ColorRole,
    },
    /// Numeral image on a backing plate
    Glyph {
        anchor: GlyphAnchor,
        backing: ColorRole,
    },
}

/// Border drawn after every layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Border {
    pub outline: Outline,
    pub role: ColorRole,
}

/// Border stroke width in pixels
pub const BORDER_WIDTH: u32 = 2;
