//! Frame buffer and layer compositor for Dialface
//!
//! This crate provides:
//! - `FrameBuffer`, an in-memory `DrawTarget` sized for the target panel
//! - `Compositor`, which renders a face variant's layer list for a time and
//!   theme onto any `DrawTarget<Color = Color>`
//! - `GlyphSource`, the interface numeral images are fetched through
//!
//! # Architecture
//!
//! ```text
//! FaceVariant ──layout()──► FaceLayout ──► Compositor ──► DrawTarget
//!                                              ▲
//!                         Theme + TimeSample ──┘
//! ```
//!
//! The compositor holds no frame-to-frame state. Drawing is plain
//! embedded-graphics, so the same code renders to the frame buffer in tests
//! and to a panel driver on hardware.

#![no_std]
#![deny(unsafe_code)]

pub mod compositor;
pub mod framebuffer;
pub mod glyph;
pub mod raster;

// Re-export key types
pub use compositor::{Compositor, RenderStats};
pub use framebuffer::FrameBuffer;
pub use glyph::{DigitGlyphs, GlyphSource, NoGlyphs};
