//! Hand angles derived from the time of day
//!
//! Angles are fixed-point fractions of a turn: [`FULL_TURN`] units per
//! revolution, 0 at 12 o'clock, increasing clockwise.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Units in one full revolution
pub const FULL_TURN: i32 = 0x10000;

/// Units in a quarter revolution (3 o'clock)
pub const QUARTER_TURN: i32 = FULL_TURN / 4;

/// Units in half a revolution (6 o'clock)
pub const HALF_TURN: i32 = FULL_TURN / 2;

/// A wall-clock sample at minute resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeSample {
    hour: u8,
    minute: u8,
}

impl TimeSample {
    /// Create a sample, rejecting out-of-range fields
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Midnight
    pub const fn midnight() -> Self {
        Self { hour: 0, minute: 0 }
    }

    /// Hour of day (0-23)
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute of hour (0-59)
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes since midnight
    pub const fn minute_of_day(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    /// Which half of the day this sample falls in
    pub const fn phase(&self) -> Phase {
        if self.hour < 12 {
            Phase::Day
        } else {
            Phase::Night
        }
    }
}

/// A normalized angle
///
/// Stored in 16 bits, so every value is already within `[0, FULL_TURN)` and
/// arithmetic wraps around the dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Angle(u16);

impl Angle {
    /// 12 o'clock
    pub const ZERO: Angle = Angle(0);

    /// Create an angle from any signed value, wrapping into one turn
    pub const fn from_raw(raw: i32) -> Self {
        Angle(raw.rem_euclid(FULL_TURN) as u16)
    }

    /// Angle of `part` out of `whole` equal steps around the dial
    ///
    /// Multiplies before dividing so exact fractions stay exact.
    pub const fn from_fraction(part: i32, whole: i32) -> Self {
        Self::from_raw(FULL_TURN * part / whole)
    }

    /// Angle of an hour mark on a 12-hour dial
    pub const fn hour_mark(hour: u8) -> Self {
        Self::from_fraction((hour % 12) as i32, 12)
    }

    /// Raw value in `[0, FULL_TURN)`
    pub const fn raw(self) -> i32 {
        self.0 as i32
    }

    /// Add with wrap-around
    pub const fn wrapping_add(self, other: Angle) -> Self {
        Angle(self.0.wrapping_add(other.0))
    }

    /// Subtract with wrap-around
    pub const fn wrapping_sub(self, other: Angle) -> Self {
        Angle(self.0.wrapping_sub(other.0))
    }

    /// The angle pointing the opposite way
    pub const fn opposite(self) -> Self {
        self.wrapping_add(Angle(HALF_TURN as u16))
    }

    /// Check whether this angle lies within the clockwise sweep that starts
    /// at `start` and spans `sweep` (inclusive at both ends)
    pub const fn within_sweep(self, start: Angle, sweep: Angle) -> bool {
        self.wrapping_sub(start).0 <= sweep.0
    }
}

/// How the hour hand moves between hours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HourPolicy {
    /// Jump once per hour
    Discrete,
    /// Advance every minute
    Continuous,
}

/// Half of the day, used by faces that swap colors at noon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Midnight to noon
    Day,
    /// Noon to midnight
    Night,
}

/// Minute hand angle
pub const fn minute_angle(time: TimeSample) -> Angle {
    Angle::from_fraction(time.minute as i32, 60)
}

/// Hour hand angle under the given policy
///
/// Both policies agree on the hour; `Continuous` additionally advances the
/// hand by one 720th of a turn per minute.
pub const fn hour_angle(time: TimeSample, policy: HourPolicy) -> Angle {
    let hour = (time.hour % 12) as i32;
    match policy {
        HourPolicy::Discrete => Angle::from_fraction(hour, 12),
        HourPolicy::Continuous => Angle::from_fraction(hour * 60 + time.minute as i32, 720),
    }
}

/// Everything a frame needs to know about the time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HandAngles {
    pub hour: Angle,
    pub minute: Angle,
    pub phase: Phase,
}

impl HandAngles {
    /// Derive the hand angles for a sample
    pub const fn at(time: TimeSample, policy: HourPolicy) -> Self {
        Self {
            hour: hour_angle(time, policy),
            minute: minute_angle(time),
            phase: time.phase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(hour: u8, minute: u8) -> TimeSample {
        TimeSample::new(hour, minute).unwrap()
    }

    #[test]
    fn test_time_sample_validation() {
        assert!(TimeSample::new(23, 59).is_some());
        assert!(TimeSample::new(24, 0).is_none());
        assert!(TimeSample::new(0, 60).is_none());
    }

    #[test]
    fn test_minute_angle_endpoints() {
        assert_eq!(minute_angle(at(5, 0)), Angle::ZERO);
        assert_eq!(minute_angle(at(5, 15)).raw(), QUARTER_TURN);
        assert_eq!(minute_angle(at(5, 59)).raw(), FULL_TURN * 59 / 60);
    }

    #[test]
    fn test_discrete_hour_angle() {
        let time = at(15, 30);
        assert_eq!(hour_angle(time, HourPolicy::Discrete).raw(), FULL_TURN * 3 / 12);
        assert_eq!(minute_angle(time).raw(), HALF_TURN);
        assert_eq!(time.phase(), Phase::Night);
    }

    #[test]
    fn test_noon_and_midnight_point_up() {
        for policy in [HourPolicy::Discrete, HourPolicy::Continuous] {
            assert_eq!(hour_angle(at(0, 0), policy), Angle::ZERO);
            assert_eq!(hour_angle(at(12, 0), policy), Angle::ZERO);
        }
        assert_eq!(at(11, 59).phase(), Phase::Day);
        assert_eq!(at(12, 0).phase(), Phase::Night);
    }

    #[test]
    fn test_continuous_half_past() {
        // Half way between 9 and 10
        let angle = hour_angle(at(21, 30), HourPolicy::Continuous);
        assert_eq!(angle.raw(), FULL_TURN * 570 / 720);
    }

    #[test]
    fn test_from_raw_wraps() {
        assert_eq!(Angle::from_raw(FULL_TURN), Angle::ZERO);
        assert_eq!(Angle::from_raw(-1).raw(), FULL_TURN - 1);
        assert_eq!(Angle::from_raw(FULL_TURN + QUARTER_TURN).raw(), QUARTER_TURN);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Angle::ZERO.opposite().raw(), HALF_TURN);
        assert_eq!(Angle::from_raw(3 * QUARTER_TURN).opposite().raw(), QUARTER_TURN);
    }

    #[test]
    fn test_within_sweep() {
        let quarter = Angle::from_raw(QUARTER_TURN);
        assert!(Angle::ZERO.within_sweep(Angle::ZERO, quarter));
        assert!(quarter.within_sweep(Angle::ZERO, quarter));
        assert!(!Angle::from_raw(QUARTER_TURN + 1).within_sweep(Angle::ZERO, quarter));
        // A sweep that crosses 12 o'clock
        let start = Angle::from_raw(FULL_TURN - 100);
        assert!(Angle::from_raw(50).within_sweep(start, Angle::from_raw(200)));
        assert!(!Angle::from_raw(150).within_sweep(start, Angle::from_raw(200)));
    }

    proptest! {
        #[test]
        fn test_continuous_strictly_increases_within_hour(hour in 0u8..24, minute in 0u8..59) {
            let now = hour_angle(at(hour, minute), HourPolicy::Continuous);
            let next = hour_angle(at(hour, minute + 1), HourPolicy::Continuous);
            prop_assert!(next.raw() > now.raw());
        }

        #[test]
        fn test_discrete_hour_holds_for_the_whole_hour(hour in 0u8..24, minute in 0u8..60) {
            prop_assert_eq!(
                hour_angle(at(hour, minute), HourPolicy::Discrete),
                hour_angle(at(hour, 0), HourPolicy::Discrete)
            );
        }

        #[test]
        fn test_minute_angle_increases(hour in 0u8..24, minute in 0u8..59) {
            prop_assert!(minute_angle(at(hour, minute)).raw() < minute_angle(at(hour, minute + 1)).raw());
        }

        #[test]
        fn test_policies_agree_on_the_hour(hour in 0u8..24) {
            prop_assert_eq!(
                hour_angle(at(hour, 0), HourPolicy::Continuous),
                hour_angle(at(hour, 0), HourPolicy::Discrete)
            );
        }

        #[test]
        fn test_angles_are_pure(hour in 0u8..24, minute in 0u8..60) {
            let time = at(hour, minute);
            prop_assert_eq!(
                HandAngles::at(time, HourPolicy::Continuous),
                HandAngles::at(time, HourPolicy::Continuous)
            );
        }
    }
}
