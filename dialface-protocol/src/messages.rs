//! Configuration messages
//!
//! A configuration message is a [`Dictionary`] keyed by [`SettingKey`]
//! message ids. Only the keys present in a message are changed.

use crate::dictionary::{DictError, Dictionary, Tuple};
use crate::keys::{SettingKey, SettingKind};

/// A partial settings update
///
/// Flags are decoded as "non-zero means on". Colors are kept as the raw
/// packed integers from the wire; validation happens when the update is
/// applied so a malformed color can be rejected without dropping the rest
/// of the message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PartialSettings {
    pub invert_colors: Option<bool>,
    pub use_alternate_shape: Option<bool>,
    pub background_color: Option<i32>,
    pub hours_color: Option<i32>,
    pub minutes_color: Option<i32>,
    pub hours_overlay_color: Option<i32>,
    pub minutes_overlay_color: Option<i32>,
}

impl PartialSettings {
    /// An update that changes nothing
    pub const fn empty() -> Self {
        Self {
            invert_colors: None,
            use_alternate_shape: None,
            background_color: None,
            hours_color: None,
            minutes_color: None,
            hours_overlay_color: None,
            minutes_overlay_color: None,
        }
    }

    /// Check whether no field is present
    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    /// Raw color value for a color key
    pub fn color(&self, key: SettingKey) -> Option<i32> {
        match key {
            SettingKey::BackgroundColor => self.background_color,
            SettingKey::HoursColor => self.hours_color,
            SettingKey::MinutesColor => self.minutes_color,
            SettingKey::HoursOverlayColor => self.hours_overlay_color,
            SettingKey::MinutesOverlayColor => self.minutes_overlay_color,
            SettingKey::InvertColors | SettingKey::UseAlternateShape => None,
        }
    }

    /// Flag value for a flag key
    pub fn flag(&self, key: SettingKey) -> Option<bool> {
        match key {
            SettingKey::InvertColors => self.invert_colors,
            SettingKey::UseAlternateShape => self.use_alternate_shape,
            _ => None,
        }
    }

    /// Set the raw integer value for a key
    pub fn set(&mut self, key: SettingKey, value: i32) {
        let flag = value != 0;
        match key {
            SettingKey::InvertColors => self.invert_colors = Some(flag),
            SettingKey::UseAlternateShape => self.use_alternate_shape = Some(flag),
            SettingKey::BackgroundColor => self.background_color = Some(value),
            SettingKey::HoursColor => self.hours_color = Some(value),
            SettingKey::MinutesColor => self.minutes_color = Some(value),
            SettingKey::HoursOverlayColor => self.hours_overlay_color = Some(value),
            SettingKey::MinutesOverlayColor => self.minutes_overlay_color = Some(value),
        }
    }

    /// Decode an update from a configuration dictionary
    ///
    /// Unknown keys and tuples without an integer reading are ignored.
    pub fn from_dictionary(dict: &Dictionary) -> Self {
        let mut update = Self::empty();
        for tuple in dict.iter() {
            let Some(key) = SettingKey::from_message_id(tuple.key) else {
                continue;
            };
            if let Some(value) = tuple.as_i32() {
                update.set(key, value);
            }
        }
        update
    }

    /// Decode an update straight from message bytes
    pub fn decode(bytes: &[u8]) -> Result<Self, DictError> {
        Dictionary::decode(bytes).map(|dict| Self::from_dictionary(&dict))
    }

    /// Build the dictionary carrying this update
    ///
    /// Used by companion tooling and for testing.
    pub fn to_dictionary(&self) -> Result<Dictionary, DictError> {
        let mut dict = Dictionary::new();
        for key in SettingKey::ALL {
            let value = match key.kind() {
                SettingKind::Flag => self.flag(key).map(i32::from),
                SettingKind::Color => self.color(key),
            };
            if let Some(value) = value {
                dict.push(Tuple::int(key.message_id(), value))?;
            }
        }
        Ok(dict)
    }
}
