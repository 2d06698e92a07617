//! `hh:mm` clock values and study durations.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;
use thiserror::Error;

/// Largest hour accepted when parsing.
const MAX_HOURS: u32 = 23;
/// Largest minute accepted when parsing.
const MAX_MINUTES: u32 = 59;

/// Why an `hh:mm` string was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("expected hh:mm, got '{0}'")]
    Shape(String),

    #[error("'{0}' is not a whole number")]
    NotANumber(String),

    #[error("{0} is outside 00:00-23:59")]
    OutOfRange(String),
}

/// A time of day such as `09:30`.
///
/// Parsed values are always within `00:00`-`23:59`. Adding a [`Duration`]
/// carries minutes into hours but never wraps the hour at midnight, so a
/// late session can end at `24:30`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hours: u32,
    minutes: u32,
}

/// Elapsed study time, written in the same `hh:mm` form as [`ClockTime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    hours: u32,
    minutes: u32,
}

/// Check whether `text` is a well-formed `hh:mm` value.
///
/// Never fails; callers use the boolean to decide whether to ask again.
pub fn validate(text: &str) -> bool {
    parse_hh_mm(text).is_ok()
}

fn parse_hh_mm(text: &str) -> Result<(u32, u32), TimeError> {
    let parts: Vec<&str> = text.split(':').collect();
    let [hours, minutes] = parts.as_slice() else {
        return Err(TimeError::Shape(text.to_string()));
    };

    let hours = parse_part(hours)?;
    let minutes = parse_part(minutes)?;

    if hours > MAX_HOURS || minutes > MAX_MINUTES {
        return Err(TimeError::OutOfRange(text.trim().to_string()));
    }

    Ok((hours, minutes))
}

fn parse_part(part: &str) -> Result<u32, TimeError> {
    part.trim()
        .parse::<u32>()
        .map_err(|_| TimeError::NotANumber(part.to_string()))
}

impl ClockTime {
    /// Create a clock time, rejecting values outside `00:00`-`23:59`.
    pub fn new(hours: u32, minutes: u32) -> Result<Self, TimeError> {
        if hours > MAX_HOURS || minutes > MAX_MINUTES {
            return Err(TimeError::OutOfRange(format!("{:02}:{:02}", hours, minutes)));
        }
        Ok(Self { hours, minutes })
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }
}

impl Duration {
    /// Create a duration using the same bounds as `hh:mm` input.
    pub fn new(hours: u32, minutes: u32) -> Result<Self, TimeError> {
        if hours > MAX_HOURS || minutes > MAX_MINUTES {
            return Err(TimeError::OutOfRange(format!("{:02}:{:02}", hours, minutes)));
        }
        Ok(Self { hours, minutes })
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Total length in minutes.
    pub fn as_minutes(&self) -> u32 {
        self.hours * 60 + self.minutes
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hours, minutes) = parse_hh_mm(s)?;
        Ok(Self { hours, minutes })
    }
}

impl FromStr for Duration {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hours, minutes) = parse_hh_mm(s)?;
        Ok(Self { hours, minutes })
    }
}

impl Add<Duration> for ClockTime {
    type Output = ClockTime;

    fn add(self, duration: Duration) -> ClockTime {
        let mut hours = self.hours + duration.hours;
        let mut minutes = self.minutes + duration.minutes;
        if minutes >= 60 {
            hours += 1;
            minutes -= 60;
        }
        ClockTime { hours, minutes }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}
