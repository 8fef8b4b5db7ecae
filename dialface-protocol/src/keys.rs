//! Settings keys
//!
//! The closed set of keys shared by the configuration message codec and the
//! persistent store. Message ids are stable: a companion configuration page
//! addresses settings by these numbers.

/// What kind of value a setting carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingKind {
    /// On/off toggle
    Flag,
    /// Packed `0xRRGGBB` color
    Color,
}

/// Settings keys
///
/// Every key that can arrive in a configuration message or be written to
/// the settings store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SettingKey {
    /// Swap black/white and dark/light gray across the face
    InvertColors = 0,
    /// Use the rectangular layout on rectangular displays
    UseAlternateShape = 1,
    /// Background color override
    BackgroundColor = 2,
    /// Hour hand / hour marker color override
    HoursColor = 3,
    /// Minute hand / minute marker color override
    MinutesColor = 4,
    /// Hour hand overlay stroke color override
    HoursOverlayColor = 5,
    /// Minute hand overlay stroke color override
    MinutesOverlayColor = 6,
}

impl SettingKey {
    /// Every key, in id order
    pub const ALL: [SettingKey; 7] = [
        SettingKey::InvertColors,
        SettingKey::UseAlternateShape,
        SettingKey::BackgroundColor,
        SettingKey::HoursColor,
        SettingKey::MinutesColor,
        SettingKey::HoursOverlayColor,
        SettingKey::MinutesOverlayColor,
    ];

    /// Get the key as a byte value
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Create a key from a byte value
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// Message id used in configuration dictionaries
    pub fn message_id(self) -> u32 {
        self as u32
    }

    /// Look up a key by its message id
    pub fn from_message_id(id: u32) -> Option<Self> {
        u8::try_from(id).ok().and_then(Self::from_u8)
    }

    /// Value kind carried by this key
    pub fn kind(self) -> SettingKind {
        match self {
            SettingKey::InvertColors | SettingKey::UseAlternateShape => SettingKind::Flag,
            _ => SettingKind::Color,
        }
    }
}

// Implement the sequential-storage Key trait when the feature is enabled
#[cfg(feature = "sequential-storage")]
impl sequential_storage::map::Key for SettingKey {
    fn serialize_into(
        &self,
        buffer: &mut [u8],
    ) -> Result<usize, sequential_storage::map::SerializationError> {
        if buffer.is_empty() {
            return Err(sequential_storage::map::SerializationError::BufferTooSmall);
        }
        buffer[0] = self.as_u8();
        Ok(1)
    }

    fn deserialize_from(
        buffer: &[u8],
    ) -> Result<(Self, usize), sequential_storage::map::SerializationError> {
        if buffer.is_empty() {
            return Err(sequential_storage::map::SerializationError::BufferTooSmall);
        }
        match SettingKey::from_u8(buffer[0]) {
            Some(key) => Ok((key, 1)),
            None => Err(sequential_storage::map::SerializationError::InvalidFormat),
        }
    }
}
