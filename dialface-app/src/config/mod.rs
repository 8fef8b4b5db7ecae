//! Settings persistence
//!
//! Loads the theme from the settings store at startup and writes it back
//! after every change.

pub mod loader;

pub use loader::{PersistError, SettingsPersistence};
