//! User-adjustable theme settings
//!
//! The [`Theme`] is the only mutable state a face has besides the time. It
//! is owned by the face controller and handed to rendering by reference.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use dialface_protocol::{PartialSettings, SettingKey, SettingKind};

use crate::color::Color;
use crate::config::DisplayCaps;
use crate::palette::ColorRole;

/// Per-role color overrides
///
/// Only roles with a settings key can be overridden. `None` means the face
/// variant's default applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoleOverrides {
    pub background: Option<Color>,
    pub hours: Option<Color>,
    pub minutes: Option<Color>,
    pub hours_overlay: Option<Color>,
    pub minutes_overlay: Option<Color>,
}

impl RoleOverrides {
    /// No overrides
    pub const fn none() -> Self {
        Self {
            background: None,
            hours: None,
            minutes: None,
            hours_overlay: None,
            minutes_overlay: None,
        }
    }

    fn slot(&mut self, role: ColorRole) -> Option<&mut Option<Color>> {
        match role {
            ColorRole::Background => Some(&mut self.background),
            ColorRole::HourHand => Some(&mut self.hours),
            ColorRole::MinuteHand => Some(&mut self.minutes),
            ColorRole::HourOverlay => Some(&mut self.hours_overlay),
            ColorRole::MinuteOverlay => Some(&mut self.minutes_overlay),
            _ => None,
        }
    }

    /// Override for a role
    pub fn get(&self, role: ColorRole) -> Option<Color> {
        match role {
            ColorRole::Background => self.background,
            ColorRole::HourHand => self.hours,
            ColorRole::MinuteHand => self.minutes,
            ColorRole::HourOverlay => self.hours_overlay,
            ColorRole::MinuteOverlay => self.minutes_overlay,
            _ => None,
        }
    }

    /// Set or clear the override for a role
    ///
    /// Returns `true` when the stored value changed. Roles without a
    /// settings key are ignored.
    pub fn set(&mut self, role: ColorRole, color: Option<Color>) -> bool {
        match self.slot(role) {
            Some(slot) if *slot != color => {
                *slot = color;
                true
            }
            _ => false,
        }
    }
}

/// Result of applying a settings update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ApplyOutcome {
    /// At least one stored value differs from before
    pub changed: bool,
    /// Number of malformed values that were ignored
    pub rejected: u8,
}

/// Theme state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Theme {
    /// Swap the grayscale palette
    pub invert: bool,
    /// Prefer the rectangular layout on rectangular screens
    pub alternate_shape: bool,
    pub overrides: RoleOverrides,
}

impl Theme {
    /// Default theme: no inversion, round layout, no overrides
    pub const fn new() -> Self {
        Self {
            invert: false,
            alternate_shape: false,
            overrides: RoleOverrides::none(),
        }
    }

    /// Apply inversion if enabled
    pub const fn apply_inversion(&self, color: Color) -> Color {
        if self.invert {
            color.inverted()
        } else {
            color
        }
    }

    /// Whether the rectangular layout is in effect on this display
    ///
    /// Round screens always use the round layout.
    pub const fn uses_alternate_shape(&self, caps: &DisplayCaps) -> bool {
        self.alternate_shape && !caps.is_round()
    }

    /// Current value of a flag key
    pub fn flag(&self, key: SettingKey) -> Option<bool> {
        match key {
            SettingKey::InvertColors => Some(self.invert),
            SettingKey::UseAlternateShape => Some(self.alternate_shape),
            _ => None,
        }
    }

    /// Merge an update
    ///
    /// Only fields present in `update` are touched. A malformed color keeps
    /// the last good value for that role and is counted in
    /// [`ApplyOutcome::rejected`].
    pub fn apply(&mut self, update: &PartialSettings) -> ApplyOutcome {
        let mut outcome = ApplyOutcome::default();

        for key in SettingKey::ALL {
            match key.kind() {
                SettingKind::Flag => {
                    if let Some(value) = update.flag(key) {
                        outcome.changed |= self.set_flag(key, value);
                    }
                }
                SettingKind::Color => {
                    let (Some(raw), Some(role)) = (update.color(key), ColorRole::from_setting(key))
                    else {
                        continue;
                    };
                    match Color::from_hex(raw) {
                        Some(color) => outcome.changed |= self.overrides.set(role, Some(color)),
                        None => outcome.rejected = outcome.rejected.saturating_add(1),
                    }
                }
            }
        }

        outcome
    }

    /// Set a flag key
    ///
    /// Returns `true` when the stored value changed. Color keys are ignored.
    pub fn set_flag(&mut self, key: SettingKey, value: bool) -> bool {
        match self.flag_mut(key) {
            Some(flag) if *flag != value => {
                *flag = value;
                true
            }
            _ => false,
        }
    }

    fn flag_mut(&mut self, key: SettingKey) -> Option<&mut bool> {
        match key {
            SettingKey::InvertColors => Some(&mut self.invert),
            SettingKey::UseAlternateShape => Some(&mut self.alternate_shape),
            _ => None,
        }
    }
}
