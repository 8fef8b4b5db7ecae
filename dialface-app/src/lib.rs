//! Dialface application layer
//!
//! Wires the pieces together for a running watchface:
//!
//! - [`controller::FaceController`] owns the theme, the face variant and the
//!   display, and exposes the minute-tick and settings ports
//! - [`config::SettingsPersistence`] loads and saves the theme through a
//!   [`dialface_hal::SettingsStorage`]
//!
//! # Data flow
//!
//! ```text
//!  tick ───────────────► on_minute_tick ─┐
//!                                        ├─► Compositor ─► display
//!  message ─► PartialSettings ─► apply ──┤
//!                                 │      │
//!                                 └─► SettingsPersistence ─► storage
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;

pub use config::{PersistError, SettingsPersistence};
pub use controller::{FaceController, FaceError, FaceEvent};
