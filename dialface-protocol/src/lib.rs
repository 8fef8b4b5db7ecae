//! Dialface configuration protocol
//!
//! This crate defines the closed set of settings keys and the message format
//! a companion configuration page uses to change them. The same keys address
//! the persistent settings store.
//!
//! # Message Overview
//!
//! A configuration message is a tuple dictionary:
//! ```text
//! ┌───────┬──────────────────────────────────────────────┐
//! │ COUNT │ TUPLE × COUNT                                │
//! │ 1B    │ KEY 4B │ TYPE 1B │ LENGTH 2B │ VALUE         │
//! └───────┴──────────────────────────────────────────────┘
//! ```
//!
//! Only keys present in a message are updated; the face keeps every other
//! setting as it was.

#![no_std]
#![deny(unsafe_code)]

pub mod dictionary;
pub mod keys;
pub mod messages;

pub use dictionary::{DictError, Dictionary, Tuple, TupleType, TupleValue, MAX_TUPLES};
pub use keys::{SettingKey, SettingKind};
pub use messages::PartialSettings;
