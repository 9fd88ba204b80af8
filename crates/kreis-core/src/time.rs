//! Mapping between wall-clock time, the fraction of the day elapsed and angles on the wheel.
//!
//! The wheel covers one 24 hour cycle. Midnight sits at 12 o'clock (the reference angle,
//! `-PI / 2` in the usual math convention) and time runs clockwise on screen, which with a
//! y-down surface is the direction of increasing angle.

use crate::error::GeometryError;
use chrono::{Local, Timelike};
use derive_more::{Display, Into};
use serde::Serialize;
use serde_with::DeserializeFromStr;
use std::f64::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MINUTES_PER_HOUR: u32 = 60;
pub const MINUTES_PER_CYCLE: u32 = 24 * MINUTES_PER_HOUR;
pub const REFERENCE_OFFSET: f64 = -PI / 2.0;

/// A wall-clock instant reduced to minute resolution.
///
/// The fields are public so that out-of-range values coming from elsewhere can still be
/// represented; [`TimeMapper::to_ratio`] rejects them. Use [`TimeOfDay::new`] to build a
/// checked value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, DeserializeFromStr)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    pub fn new(hour: u8, minute: u8) -> Result<Self, GeometryError> {
        let time = Self { hour, minute };
        time.validate()?;
        Ok(time)
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.hour > 23 {
            return Err(GeometryError::HourOutOfRange(self.hour));
        }
        if self.minute > 59 {
            return Err(GeometryError::MinuteOutOfRange(self.minute));
        }
        Ok(())
    }

    /// Truncates any timestamp to its hour and minute.
    pub fn from_timestamp<T: Timelike>(timestamp: &T) -> Self {
        Self {
            hour: timestamp.hour() as u8,
            minute: timestamp.minute() as u8,
        }
    }

    pub fn now() -> Self {
        Self::from_timestamp(&Local::now())
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour as u32 * MINUTES_PER_HOUR + self.minute as u32
    }

    pub fn from_minutes(minutes: i64) -> Self {
        let minutes = minutes.rem_euclid(MINUTES_PER_CYCLE as i64) as u32;
        Self {
            hour: (minutes / MINUTES_PER_HOUR) as u8,
            minute: (minutes % MINUTES_PER_HOUR) as u8,
        }
    }

    /// Adds (or subtracts) minutes, wrapping around midnight.
    pub fn add_minutes(self, minutes: i64) -> Self {
        Self::from_minutes(self.minutes_since_midnight() as i64 + minutes)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseTimeError {
    #[error("expected HH:MM, got `{0}`")]
    Format(String),
    #[error(transparent)]
    OutOfRange(#[from] GeometryError),
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_err = || ParseTimeError::Format(s.to_string());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(format_err)?;
        let hour = hour.parse::<u8>().map_err(|_| format_err())?;
        let minute = minute.parse::<u8>().map_err(|_| format_err())?;
        Ok(Self::new(hour, minute)?)
    }
}

/// Fraction of the 24 hour cycle elapsed since midnight, always in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Display, Into)]
pub struct Ratio(f64);

impl Ratio {
    pub const ZERO: Self = Self(0.0);

    pub fn new(value: f64) -> Result<Self, GeometryError> {
        if value.is_finite() && (0.0..1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GeometryError::RatioOutOfRange(value))
        }
    }

    /// Folds any finite value into `[0, 1)`. Non-finite values collapse to zero.
    pub fn wrapping(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        let folded = value.rem_euclid(1.0);
        // rem_euclid can round tiny negatives up to exactly 1.0
        if folded >= 1.0 { Self::ZERO } else { Self(folded) }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Pure conversions between [`TimeOfDay`], [`Ratio`] and wheel angles (radians).
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeMapper;

impl TimeMapper {
    pub fn to_ratio(time: TimeOfDay) -> Result<Ratio, GeometryError> {
        time.validate()?;
        Ok(Ratio(
            time.minutes_since_midnight() as f64 / MINUTES_PER_CYCLE as f64,
        ))
    }

    pub fn to_angle(ratio: Ratio) -> f64 {
        ratio.0 * TAU + REFERENCE_OFFSET
    }

    pub fn angle_to_ratio(angle: f64) -> Result<Ratio, GeometryError> {
        if !angle.is_finite() {
            return Err(GeometryError::NonFiniteAngle(angle));
        }
        Ok(Ratio::wrapping((angle - REFERENCE_OFFSET).rem_euclid(TAU) / TAU))
    }

    pub fn time_to_angle(time: TimeOfDay) -> Result<f64, GeometryError> {
        Self::to_ratio(time).map(Self::to_angle)
    }

    /// The minute containing `ratio`.
    pub fn ratio_to_time(ratio: Ratio) -> TimeOfDay {
        // nudge so that ratios produced by to_ratio land back on their own minute
        let minutes = (ratio.0 * MINUTES_PER_CYCLE as f64 + 1e-9).floor() as i64;
        TimeOfDay::from_minutes(minutes)
    }
}
