//! Dialface Hardware Abstraction Layer
//!
//! This crate defines the persistence trait the watchface saves its settings
//! through, so the same face logic runs against a flash-backed map on a
//! device or an in-memory store on a host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Face controller (dialface-app)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dialface-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  RamStorage   │       │ flash map via │
//! │  (host/tests) │       │ seq-storage   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`storage::SettingsStorage`] - Persistent settings storage

#![no_std]
#![deny(unsafe_code)]

pub mod storage;

// Re-export key types at crate root for convenience
pub use storage::{RamStorage, SettingKey, SettingsStorage, StorageError};
