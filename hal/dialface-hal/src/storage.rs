//! Settings storage abstractions
//!
//! Provides the key-value storage trait the face persists its settings
//! through. Values are opaque bytes; the caller owns the encoding.

use heapless::{LinearMap, Vec};

pub use dialface_protocol::SettingKey;

/// Largest value a single key may hold
pub const MAX_VALUE_SIZE: usize = 8;

/// Number of distinct keys
pub const KEY_COUNT: usize = SettingKey::ALL.len();

/// Errors from settings storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Key not found
    NotFound,
    /// Buffer too small for the data
    BufferTooSmall,
    /// Value larger than the store accepts
    ValueTooLarge,
    /// Storage is full
    Full,
    /// Underlying medium failed
    Io,
}

/// Settings storage trait
///
/// A small persistent key-value store. Implementations decide how values
/// reach the medium (flash map, file, RAM).
pub trait SettingsStorage {
    /// Read a value by key into the provided buffer
    ///
    /// # Returns
    /// The number of bytes read, or an error.
    fn read(&mut self, key: SettingKey, buffer: &mut [u8]) -> Result<usize, StorageError>;

    /// Write a value by key, replacing any previous value
    fn write(&mut self, key: SettingKey, data: &[u8]) -> Result<(), StorageError>;

    /// Check if a key exists in storage
    fn exists(&mut self, key: SettingKey) -> bool;

    /// Remove a key
    ///
    /// Removing a key that does not exist is not an error.
    fn remove(&mut self, key: SettingKey) -> Result<(), StorageError>;
}

impl<T: SettingsStorage + ?Sized> SettingsStorage for &mut T {
    fn read(&mut self, key: SettingKey, buffer: &mut [u8]) -> Result<usize, StorageError> {
        (**self).read(key, buffer)
    }

    fn write(&mut self, key: SettingKey, data: &[u8]) -> Result<(), StorageError> {
        (**self).write(key, data)
    }

    fn exists(&mut self, key: SettingKey) -> bool {
        (**self).exists(key)
    }

    fn remove(&mut self, key: SettingKey) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-memory settings store
///
/// Backs host builds and tests. Contents are lost when it is dropped.
#[derive(Debug, Clone, Default)]
pub struct RamStorage {
    entries: LinearMap<SettingKey, Vec<u8, MAX_VALUE_SIZE>, KEY_COUNT>,
}

impl RamStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: LinearMap::new(),
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SettingsStorage for RamStorage {
    fn read(&mut self, key: SettingKey, buffer: &mut [u8]) -> Result<usize, StorageError> {
        let value = self.entries.get(&key).ok_or(StorageError::NotFound)?;
        let dest = buffer
            .get_mut(..value.len())
            .ok_or(StorageError::BufferTooSmall)?;
        dest.copy_from_slice(value);
        Ok(value.len())
    }

    fn write(&mut self, key: SettingKey, data: &[u8]) -> Result<(), StorageError> {
        let value = Vec::from_slice(data).map_err(|_| StorageError::ValueTooLarge)?;
        self.entries
            .insert(key, value)
            .map(|_| ())
            .map_err(|_| StorageError::Full)
    }

    fn exists(&mut self, key: SettingKey) -> bool {
        self.entries.contains_key(&key)
    }

    fn remove(&mut self, key: SettingKey) -> Result<(), StorageError> {
        self.entries.remove(&key);
        Ok(())
    }
}
