//! Face description
//!
//! A face variant produces a [`FaceLayout`]: layers bottom to top plus an
//! optional border. Rendering lives in `dialface-display`.

pub mod glyph;
pub mod layer;
pub mod variants;

pub use glyph::{GlyphAnchor, GlyphPlacement, GlyphTone, Numeral, PLATE_CORNER_RADIUS};
pub use layer::{
    Area, Border, HandRef, HourSet, Layer, LayerList, MarkerEdge, MarkerSpan, Outline, BORDER_WIDTH,
    MAX_LAYERS,
};
pub use variants::{BinaryFace, EclipseFace, FaceLayout, FaceVariant, HollowFace, TrioFace};
