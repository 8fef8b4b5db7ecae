//! Theme persistence
//!
//! Each setting lives under its own key. Flags are stored as a postcard
//! `bool`, color overrides as the packed `u8` color. A color key that is
//! absent means the face variant's default applies.

use serde::de::DeserializeOwned;
use serde::Serialize;

use dialface_core::palette::ColorRole;
use dialface_core::{Color, Theme};
use dialface_hal::storage::MAX_VALUE_SIZE;
use dialface_hal::{SettingKey, SettingsStorage, StorageError};
use dialface_protocol::SettingKind;

/// Settings persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PersistError {
    /// Storage operation failed
    Storage(StorageError),
    /// Serialization failed
    Serialize,
    /// Deserialization failed
    Deserialize,
    /// Stored color is not a valid opaque color
    InvalidColor,
}

impl From<StorageError> for PersistError {
    fn from(e: StorageError) -> Self {
        PersistError::Storage(e)
    }
}

/// Settings persistence manager
///
/// Owns the settings store and translates between it and [`Theme`].
pub struct SettingsPersistence<S> {
    storage: S,
}

impl<S: SettingsStorage> SettingsPersistence<S> {
    /// Create a new persistence manager
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Consume this manager and return the underlying storage
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Load the theme
    ///
    /// Keys that are absent or cannot be decoded keep their defaults; a bad
    /// key never affects the others.
    pub fn load(&mut self) -> Theme {
        let mut theme = Theme::default();

        for key in SettingKey::ALL {
            match self.load_key(key, &mut theme) {
                Ok(()) | Err(PersistError::Storage(StorageError::NotFound)) => {}
                Err(_e) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Failed to load {}: {:?}, using default", key, _e);
                }
            }
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("Loaded theme: {:?}", theme);

        theme
    }

    fn load_key(&mut self, key: SettingKey, theme: &mut Theme) -> Result<(), PersistError> {
        match key.kind() {
            SettingKind::Flag => {
                let value: bool = self.read_value(key)?;
                theme.set_flag(key, value);
            }
            SettingKind::Color => {
                let argb: u8 = self.read_value(key)?;
                let color = Color::from_argb(argb).ok_or(PersistError::InvalidColor)?;
                if let Some(role) = ColorRole::from_setting(key) {
                    theme.overrides.set(role, Some(color));
                }
            }
        }
        Ok(())
    }

    /// Save every key of the theme
    ///
    /// Keeps going after a failed key and reports the first failure.
    pub fn save(&mut self, theme: &Theme) -> Result<(), PersistError> {
        let mut first_error = None;

        for key in SettingKey::ALL {
            if let Err(e) = self.save_key(key, theme) {
                #[cfg(feature = "defmt")]
                defmt::warn!("Failed to save {}: {:?}", key, e);
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn save_key(&mut self, key: SettingKey, theme: &Theme) -> Result<(), PersistError> {
        match key.kind() {
            SettingKind::Flag => match theme.flag(key) {
                Some(value) => self.write_value(key, &value),
                None => Ok(()),
            },
            SettingKind::Color => {
                let color = ColorRole::from_setting(key).and_then(|role| theme.overrides.get(role));
                match color {
                    Some(color) => self.write_value(key, &color.argb()),
                    None => Ok(self.storage.remove(key)?),
                }
            }
        }
    }

    fn read_value<T: DeserializeOwned>(&mut self, key: SettingKey) -> Result<T, PersistError> {
        let mut buffer = [0u8; MAX_VALUE_SIZE];
        let len = self.storage.read(key, &mut buffer)?;
        postcard::from_bytes(&buffer[..len]).map_err(|_| PersistError::Deserialize)
    }

    fn write_value<T: Serialize>(&mut self, key: SettingKey, value: &T) -> Result<(), PersistError> {
        let mut buffer = [0u8; MAX_VALUE_SIZE];
        let bytes = postcard::to_slice(value, &mut buffer).map_err(|_| PersistError::Serialize)?;
        self.storage.write(key, bytes)?;
        Ok(())
    }
}
