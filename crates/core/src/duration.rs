//! Humanized durations
//!
//! Breaks an elapsed time into days, hours, minutes and seconds for display.
//! Sub-second precision is dropped.

use std::fmt;
use std::time::Duration;

use jiff::SignedDuration;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// A duration split into whole days, hours, minutes and seconds
///
/// Hours stay below 24 and minutes and seconds below 60. Zero components are
/// omitted from JSON output; deserialization rejects out-of-range components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DurationParts")]
pub struct HumanizedDuration {
    #[serde(skip_serializing_if = "is_zero")]
    days: u64,
    #[serde(skip_serializing_if = "is_zero")]
    hours: u64,
    #[serde(skip_serializing_if = "is_zero")]
    minutes: u64,
    #[serde(skip_serializing_if = "is_zero")]
    seconds: u64,
}

fn is_zero(value: &u64) -> bool {
    *value == 0
}

/// Unchecked components as they appear in JSON input
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DurationParts {
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
}

impl TryFrom<DurationParts> for HumanizedDuration {
    type Error = Error;

    fn try_from(parts: DurationParts) -> Result<Self> {
        Self::new(parts.days, parts.hours, parts.minutes, parts.seconds)
    }
}

fn checked_total(days: u64, hours: u64, minutes: u64, seconds: u64) -> Option<u64> {
    days.checked_mul(SECS_PER_DAY)?
        .checked_add(hours * SECS_PER_HOUR)?
        .checked_add(minutes * SECS_PER_MINUTE)?
        .checked_add(seconds)
}

/// Humanize a duration, truncating any sub-second remainder
pub fn humanize(d: Duration) -> HumanizedDuration {
    HumanizedDuration::from_secs(d.as_secs())
}

/// Humanize a signed duration
///
/// Negative durations are rejected.
pub fn humanize_signed(d: SignedDuration) -> Result<HumanizedDuration> {
    HumanizedDuration::try_from(d)
}

impl HumanizedDuration {
    /// Split a whole number of seconds
    pub const fn from_secs(total: u64) -> Self {
        let days = total / SECS_PER_DAY;
        let rem = total % SECS_PER_DAY;
        let hours = rem / SECS_PER_HOUR;
        let rem = rem % SECS_PER_HOUR;
        Self {
            days,
            hours,
            minutes: rem / SECS_PER_MINUTE,
            seconds: rem % SECS_PER_MINUTE,
        }
    }

    /// Build from components, rejecting any that exceed their unit
    pub fn new(days: u64, hours: u64, minutes: u64, seconds: u64) -> Result<Self> {
        if hours >= 24 || minutes >= 60 || seconds >= 60 {
            return Err(Error::InvalidDuration(format!(
                "{hours} hours {minutes} minutes {seconds} seconds is out of range"
            )));
        }
        if checked_total(days, hours, minutes, seconds).is_none() {
            return Err(Error::InvalidDuration(format!(
                "{days} days overflows the seconds count"
            )));
        }
        Ok(Self {
            days,
            hours,
            minutes,
            seconds,
        })
    }

    /// Whole days
    pub const fn days(&self) -> u64 {
        self.days
    }

    /// Hours past the last whole day, below 24
    pub const fn hours(&self) -> u64 {
        self.hours
    }

    /// Minutes past the last whole hour, below 60
    pub const fn minutes(&self) -> u64 {
        self.minutes
    }

    /// Seconds past the last whole minute, below 60
    pub const fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Total number of whole seconds represented
    ///
    /// Every constructor keeps this within `u64`; the arithmetic saturates
    /// at `u64::MAX` rather than wrapping.
    pub fn total_seconds(&self) -> u64 {
        checked_total(self.days, self.hours, self.minutes, self.seconds).unwrap_or(u64::MAX)
    }

    /// Compact form naming only the largest units
    ///
    /// Durations of up to two days also show the hours.
    pub fn to_short_string(&self) -> String {
        match (self.days, self.hours, self.minutes) {
            (0, 0, 0) => format!("{} seconds", self.seconds),
            (0, 0, m) => format!("{m} minutes"),
            (0, h, _) => format!("{h} hours"),
            (d, h, _) if d <= 2 => format!("{d} days, {h} hours"),
            (d, _, _) => format!("{d} days"),
        }
    }
}

impl From<Duration> for HumanizedDuration {
    fn from(d: Duration) -> Self {
        humanize(d)
    }
}

impl TryFrom<SignedDuration> for HumanizedDuration {
    type Error = Error;

    fn try_from(d: SignedDuration) -> Result<Self> {
        if d.is_negative() {
            return Err(Error::NegativeDuration(format!("{d:?}")));
        }
        Ok(Self::from_secs(d.as_secs().unsigned_abs()))
    }
}

impl fmt::Display for HumanizedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            days,
            hours,
            minutes,
            seconds,
        } = *self;
        match (days, hours, minutes) {
            (0, 0, 0) => write!(f, "{seconds} seconds"),
            (0, 0, _) => write!(f, "{minutes} minutes {seconds} seconds"),
            (0, _, _) => write!(f, "{hours} hours {minutes} minutes {seconds} seconds"),
            _ => write!(
                f,
                "{days} days {hours} hours {minutes} minutes {seconds} seconds"
            ),
        }
    }
}
