//! Board-agnostic core logic for Dialface watchfaces
//!
//! This crate contains everything about a face that does not depend on a
//! display driver:
//!
//! - Fixed-point angles and trigonometry
//! - Screen geometry and ray-to-boundary projection
//! - The packed color model and role-based palettes
//! - Display capabilities and the user theme
//! - Face variants and the layer lists they produce
//!
//! Nothing here allocates or draws. `dialface-display` turns a
//! [`face::FaceLayout`] into pixels.

#![no_std]
#![deny(unsafe_code)]

pub mod angle;
pub mod boundary;
pub mod color;
pub mod config;
pub mod face;
pub mod geometry;
#[cfg(feature = "embedded-graphics")]
pub mod graphics;
pub mod palette;
pub mod trig;

pub use angle::{Angle, HandAngles, HourPolicy, Phase, TimeSample};
pub use color::Color;
pub use config::{DisplayCaps, DisplayProfile, Theme};
pub use face::{FaceLayout, FaceVariant};
