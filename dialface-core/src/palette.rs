//! Color roles and their resolution
//!
//! Layers never name concrete colors. They name a [`ColorRole`], and the
//! face variant's [`Palette`] together with the current [`Theme`] and the
//! display's capabilities decide what color that role is right now.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use dialface_protocol::SettingKey;

use crate::color::Color;
use crate::config::{DisplayCaps, Theme};

/// Logical color slot used by layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorRole {
    Background,
    /// Foreground detail drawn directly on the background
    Accent,
    HourHand,
    MinuteHand,
    HourOverlay,
    MinuteOverlay,
    Border,
    RingOuter,
    Ring,
    RingInner,
    Center,
    CenterRim,
    /// Narrow strip along one side of a marker
    MarkerEdge,
    Line,
    /// Light half of a radial split
    SplitLight,
    /// Dark half of a radial split
    SplitDark,
}

impl ColorRole {
    /// Settings key that overrides this role, if any
    pub const fn setting_key(self) -> Option<SettingKey> {
        match self {
            ColorRole::Background => Some(SettingKey::BackgroundColor),
            ColorRole::HourHand => Some(SettingKey::HoursColor),
            ColorRole::MinuteHand => Some(SettingKey::MinutesColor),
            ColorRole::HourOverlay => Some(SettingKey::HoursOverlayColor),
            ColorRole::MinuteOverlay => Some(SettingKey::MinutesOverlayColor),
            _ => None,
        }
    }

    /// Role overridden by a settings key
    pub const fn from_setting(key: SettingKey) -> Option<Self> {
        match key {
            SettingKey::BackgroundColor => Some(ColorRole::Background),
            SettingKey::HoursColor => Some(ColorRole::HourHand),
            SettingKey::MinutesColor => Some(ColorRole::MinuteHand),
            SettingKey::HoursOverlayColor => Some(ColorRole::HourOverlay),
            SettingKey::MinutesOverlayColor => Some(ColorRole::MinuteOverlay),
            SettingKey::InvertColors | SettingKey::UseAlternateShape => None,
        }
    }
}

/// What a role becomes on a black and white screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fallback {
    /// A fixed color
    Color(Color),
    /// Whatever another role is set to
    Role(ColorRole),
    /// The two-tone contrast of another role
    ContrastOf(ColorRole),
}

/// Default color for one role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PaletteEntry {
    pub role: ColorRole,
    pub color: Color,
    /// Substitute on monochrome displays
    pub mono: Option<Fallback>,
    /// Whether color inversion applies to this role
    pub invertible: bool,
}

impl PaletteEntry {
    pub const fn new(role: ColorRole, color: Color) -> Self {
        Self {
            role,
            color,
            mono: None,
            invertible: true,
        }
    }

    /// Set the monochrome substitute
    pub const fn mono(self, fallback: Fallback) -> Self {
        Self {
            mono: Some(fallback),
            ..self
        }
    }

    /// Exclude this role from inversion
    pub const fn fixed(self) -> Self {
        Self {
            invertible: false,
            ..self
        }
    }
}

/// Declared role table of a face variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    entries: &'static [PaletteEntry],
}

impl Palette {
    pub const fn new(entries: &'static [PaletteEntry]) -> Self {
        Self { entries }
    }

    /// Entry for a role
    pub fn entry(&self, role: ColorRole) -> Option<&PaletteEntry> {
        self.entries.iter().find(|e| e.role == role)
    }

    /// All declared entries
    pub fn entries(&self) -> &'static [PaletteEntry] {
        self.entries
    }
}

/// Resolves roles to concrete colors for one frame
#[derive(Debug, Clone, Copy)]
pub struct ThemeResolver<'a> {
    theme: &'a Theme,
    palette: Palette,
    caps: &'a DisplayCaps,
}

impl<'a> ThemeResolver<'a> {
    pub fn new(theme: &'a Theme, palette: Palette, caps: &'a DisplayCaps) -> Self {
        Self {
            theme,
            palette,
            caps,
        }
    }

    /// Override if set, otherwise the palette default
    fn base(&self, role: ColorRole) -> Color {
        self.theme.overrides.get(role).unwrap_or_else(|| {
            self.palette
                .entry(role)
                .map(|e| e.color)
                .unwrap_or(Color::WHITE)
        })
    }

    /// Concrete color for `role`
    ///
    /// Order: override or default, then the monochrome substitute on mono
    /// displays, then inversion. A role the palette does not declare
    /// resolves like the background.
    pub fn resolve(&self, role: ColorRole) -> Color {
        let Some(entry) = self.palette.entry(role) else {
            return match role {
                ColorRole::Background => self.theme.apply_inversion(self.base(role)),
                _ => self.resolve(ColorRole::Background),
            };
        };

        let color = match entry.mono {
            Some(fallback) if self.caps.is_mono() => match fallback {
                Fallback::Color(color) => color,
                Fallback::Role(other) => self.base(other),
                Fallback::ContrastOf(other) => self.base(other).contrast(),
            },
            _ => self.base(role),
        };

        if entry.invertible {
            self.theme.apply_inversion(color)
        } else {
            color
        }
    }
}
