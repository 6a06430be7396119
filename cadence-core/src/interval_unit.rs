use chrono::{NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit of the sub-day step used by recurring time windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum IntervalUnit {
    Seconds,
    Minutes,
    Hours,
}

impl std::str::FromStr for IntervalUnit {
    type Err = String;

    /// Parse IntervalUnit from its name, case-insensitively.
    /// Accepts "seconds", "minutes", "hours" and their singular forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "seconds" | "second" => Ok(IntervalUnit::Seconds),
            "minutes" | "minute" => Ok(IntervalUnit::Minutes),
            "hours" | "hour" => Ok(IntervalUnit::Hours),
            _ => Err(format!("Invalid interval unit: {}", s)),
        }
    }
}

impl TryFrom<String> for IntervalUnit {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<IntervalUnit> for String {
    fn from(unit: IntervalUnit) -> Self {
        unit.to_string()
    }
}

impl fmt::Display for IntervalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IntervalUnit::Seconds => "seconds",
            IntervalUnit::Minutes => "minutes",
            IntervalUnit::Hours => "hours",
        })
    }
}

impl IntervalUnit {
    pub fn to_delta(&self, value: u32) -> TimeDelta {
        let value = i64::from(value);
        match self {
            IntervalUnit::Seconds => TimeDelta::seconds(value),
            IntervalUnit::Minutes => TimeDelta::minutes(value),
            IntervalUnit::Hours => TimeDelta::hours(value),
        }
    }

    /// Step `value` units forward from `from`.
    ///
    /// An hour step lands on the top of the resulting hour, so minutes and
    /// seconds of `from` never survive it. Minute and second steps are added
    /// as-is. Returns `None` when the result leaves chrono's range.
    pub fn step(&self, from: NaiveDateTime, value: u32) -> Option<NaiveDateTime> {
        let stepped = from.checked_add_signed(self.to_delta(value))?;
        match self {
            IntervalUnit::Hours => stepped.date().and_hms_opt(stepped.hour(), 0, 0),
            IntervalUnit::Seconds | IntervalUnit::Minutes => Some(stepped),
        }
    }
}
