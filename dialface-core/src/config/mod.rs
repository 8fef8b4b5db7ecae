//! Configuration types
//!
//! Display capabilities and the user theme. Both are resolved outside the
//! renderer and passed in by reference.

pub mod display;
pub mod settings;

pub use display::*;
pub use settings::*;
