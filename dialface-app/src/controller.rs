//! Face controller
//!
//! The controller owns the theme, the active face variant and the display,
//! and exposes the two input ports the platform drives:
//!
//! - `on_minute_tick`: the wall clock advanced, redraw
//! - `on_settings_changed`: a settings update arrived, apply, persist and
//!   redraw if anything changed
//!
//! There is no event loop here. The platform calls the ports from whatever
//! tick and message callbacks it has.

use dialface_core::angle::TimeSample;
use dialface_core::{Color, FaceVariant, Theme};
use dialface_display::{Compositor, RenderStats};
use dialface_hal::SettingsStorage;
use dialface_protocol::{DictError, PartialSettings};
use embedded_graphics::draw_target::DrawTarget;

use crate::config::{PersistError, SettingsPersistence};

/// Input to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceEvent {
    /// The minute changed
    MinuteTick(TimeSample),
    /// A settings update arrived
    SettingsChanged(PartialSettings),
}

/// Controller errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceError<E> {
    /// Drawing to the display failed
    Display(E),
    /// An inbound settings message could not be decoded
    Message(DictError),
}

impl<E> From<DictError> for FaceError<E> {
    fn from(e: DictError) -> Self {
        FaceError::Message(e)
    }
}

/// Coordinates theme, persistence and rendering for one display
pub struct FaceController<'g, D, S> {
    variant: FaceVariant,
    theme: Theme,
    compositor: Compositor<'g>,
    display: D,
    persistence: SettingsPersistence<S>,
    /// Last time drawn; settings changes redraw at this time
    time: TimeSample,
    last_stats: RenderStats,
    last_persist_error: Option<PersistError>,
}

impl<'g, D, S> FaceController<'g, D, S>
where
    D: DrawTarget<Color = Color>,
    S: SettingsStorage,
{
    /// Create a controller, loading the theme from `storage`
    ///
    /// Nothing is drawn until the first tick.
    pub fn new(variant: FaceVariant, compositor: Compositor<'g>, display: D, storage: S) -> Self {
        let mut persistence = SettingsPersistence::new(storage);
        let theme = persistence.load();

        #[cfg(feature = "defmt")]
        defmt::info!("Face {} ready", variant.name());

        Self {
            variant,
            theme,
            compositor,
            display,
            persistence,
            time: TimeSample::midnight(),
            last_stats: RenderStats::default(),
            last_persist_error: None,
        }
    }

    /// Current theme
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn variant(&self) -> &FaceVariant {
        &self.variant
    }

    /// Time of the last drawn frame
    pub fn time(&self) -> TimeSample {
        self.time
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Stats of the last drawn frame
    pub fn last_stats(&self) -> RenderStats {
        self.last_stats
    }

    /// Most recent persistence failure, cleared by the next successful save
    pub fn last_persist_error(&self) -> Option<PersistError> {
        self.last_persist_error
    }

    /// Consume the controller and return the display and storage
    pub fn into_parts(self) -> (D, S) {
        (self.display, self.persistence.into_storage())
    }

    /// The clock advanced; draw a frame for `time`
    pub fn on_minute_tick(&mut self, time: TimeSample) -> Result<RenderStats, FaceError<D::Error>> {
        self.time = time;
        self.redraw()
    }

    /// Apply a settings update
    ///
    /// The merged theme is persisted on every update, so a save that failed
    /// earlier is retried when the same values arrive again. The face is
    /// redrawn only when a value changed, and the return value says whether
    /// it was. A failed save is logged and the face keeps the new theme.
    pub fn on_settings_changed(&mut self, update: &PartialSettings) -> Result<bool, FaceError<D::Error>> {
        let outcome = self.theme.apply(update);

        if outcome.rejected > 0 {
            #[cfg(feature = "defmt")]
            defmt::warn!("Ignored {} malformed color values", outcome.rejected);
        }

        self.last_persist_error = self.persistence.save(&self.theme).err();
        if let Some(_e) = self.last_persist_error {
            #[cfg(feature = "defmt")]
            defmt::warn!("Failed to persist settings: {:?}", _e);
        }

        if !outcome.changed {
            return Ok(false);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("Theme updated: {:?}", self.theme);

        self.redraw()?;
        Ok(true)
    }

    /// Decode a settings message and apply it
    pub fn on_message(&mut self, bytes: &[u8]) -> Result<bool, FaceError<D::Error>> {
        let update = PartialSettings::decode(bytes)?;
        self.on_settings_changed(&update)
    }

    /// Dispatch an event to its port
    ///
    /// Returns whether a frame was drawn.
    pub fn handle(&mut self, event: FaceEvent) -> Result<bool, FaceError<D::Error>> {
        match event {
            FaceEvent::MinuteTick(time) => self.on_minute_tick(time).map(|_| true),
            FaceEvent::SettingsChanged(update) => self.on_settings_changed(&update),
        }
    }

    /// Switch to another face and redraw
    pub fn set_variant(&mut self, variant: FaceVariant) -> Result<RenderStats, FaceError<D::Error>> {
        self.variant = variant;
        self.redraw()
    }

    fn redraw(&mut self) -> Result<RenderStats, FaceError<D::Error>> {
        let stats = self
            .compositor
            .render(&mut self.display, &self.variant, self.time, &self.theme)
            .map_err(FaceError::Display)?;

        if stats.skipped > 0 {
            #[cfg(feature = "defmt")]
            defmt::debug!("{} layers skipped", stats.skipped);
        }

        self.last_stats = stats;
        Ok(stats)
    }
}
