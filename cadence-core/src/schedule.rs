use crate::interval_unit::IntervalUnit;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

fn default_enabled() -> bool {
    true
}

/// A named recurrence rule.
///
/// A schedule is a plain value: it is never mutated while an occurrence is
/// being computed, and computing one never touches anything but the schedule
/// and the reference instant handed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub name: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    pub kind: ScheduleKind,
}

/// The `[start_date, end_date]` range of a recurring schedule.
/// An absent `end_date` means the schedule never ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub start_date: NaiveDateTime,
    #[serde(default)]
    pub end_date: Option<NaiveDateTime>,
}

impl Bounds {
    pub fn new(start_date: NaiveDateTime, end_date: Option<NaiveDateTime>) -> Self {
        Self { start_date, end_date }
    }
}

/// Every supported recurrence pattern.
///
/// Each recurring pattern comes in two flavours through its [`DailyFrequency`]:
/// a single fire at a fixed time of day, or repeated fires stepped through a
/// [`TimeWindow`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScheduleKind {
    /// Fires exactly once.
    Once { execution_date: NaiveDateTime },

    /// Fires every calendar day.
    Daily {
        bounds: Bounds,
        frequency: DailyFrequency,
    },

    /// Fires on the selected weekdays of every `every_after_weeks`-th
    /// seven-day block counted from the start date.
    Weekly {
        bounds: Bounds,
        every_after_weeks: u32,
        days: HashSet<Weekday>,
        frequency: DailyFrequency,
    },

    /// Fires on a fixed day of every `every_after_months`-th month.
    MonthlyDay {
        bounds: Bounds,
        every_after_months: u32,
        monthly_day: u32,
        frequency: DailyFrequency,
    },

    /// Fires on a positional day (e.g. the last Friday) of every
    /// `every_after_months`-th month.
    MonthlyPeriod {
        bounds: Bounds,
        every_after_months: u32,
        position: MonthlyPosition,
        day: PeriodDay,
        frequency: DailyFrequency,
    },
}

impl ScheduleKind {
    pub fn bounds(&self) -> Option<&Bounds> {
        match self {
            ScheduleKind::Once { .. } => None,
            ScheduleKind::Daily { bounds, .. }
            | ScheduleKind::Weekly { bounds, .. }
            | ScheduleKind::MonthlyDay { bounds, .. }
            | ScheduleKind::MonthlyPeriod { bounds, .. } => Some(bounds),
        }
    }

    pub fn frequency(&self) -> Option<&DailyFrequency> {
        match self {
            ScheduleKind::Once { .. } => None,
            ScheduleKind::Daily { frequency, .. }
            | ScheduleKind::Weekly { frequency, .. }
            | ScheduleKind::MonthlyDay { frequency, .. }
            | ScheduleKind::MonthlyPeriod { frequency, .. } => Some(frequency),
        }
    }
}

/// How often a recurring schedule fires on each of its days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DailyFrequency {
    Once { execution_time: NaiveTime },
    Recurring(TimeWindow),
}

impl DailyFrequency {
    pub fn once(execution_time: NaiveTime) -> Self {
        DailyFrequency::Once { execution_time }
    }

    pub fn recurring(
        every_after: u32,
        interval_unit: IntervalUnit,
        starting_time: NaiveTime,
        ending_time: NaiveTime,
    ) -> Self {
        DailyFrequency::Recurring(TimeWindow {
            every_after,
            interval_unit,
            starting_time,
            ending_time,
        })
    }

    /// Time of the first fire on any day the schedule runs.
    pub fn first_time(&self) -> NaiveTime {
        match self {
            DailyFrequency::Once { execution_time } => *execution_time,
            DailyFrequency::Recurring(window) => window.starting_time,
        }
    }
}

/// Sub-day stepping window: fires at `starting_time`, then every
/// `every_after` units while still inside `[starting_time, ending_time]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub every_after: u32,
    pub interval_unit: IntervalUnit,
    pub starting_time: NaiveTime,
    pub ending_time: NaiveTime,
}

/// Which matching day of the month a positional schedule picks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MonthlyPosition {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

impl MonthlyPosition {
    /// Zero-based index among the month's matches, `None` for [`MonthlyPosition::Last`].
    pub fn index(&self) -> Option<usize> {
        match self {
            MonthlyPosition::First => Some(0),
            MonthlyPosition::Second => Some(1),
            MonthlyPosition::Third => Some(2),
            MonthlyPosition::Fourth => Some(3),
            MonthlyPosition::Last => None,
        }
    }
}

impl std::str::FromStr for MonthlyPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first" => Ok(MonthlyPosition::First),
            "second" => Ok(MonthlyPosition::Second),
            "third" => Ok(MonthlyPosition::Third),
            "fourth" => Ok(MonthlyPosition::Fourth),
            "last" => Ok(MonthlyPosition::Last),
            _ => Err(format!("Invalid monthly position: {}", s)),
        }
    }
}

impl fmt::Display for MonthlyPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MonthlyPosition::First => "first",
            MonthlyPosition::Second => "second",
            MonthlyPosition::Third => "third",
            MonthlyPosition::Fourth => "fourth",
            MonthlyPosition::Last => "last",
        })
    }
}

impl TryFrom<String> for MonthlyPosition {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthlyPosition> for String {
    fn from(position: MonthlyPosition) -> Self {
        position.to_string()
    }
}

/// The kind of day a positional schedule counts.
///
/// [`PeriodDay::Day`] is not counted like the others: it resolves to the
/// fixed day numbers 1 to 4, or to the month's last day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PeriodDay {
    Named(Weekday),
    WeekendDay,
    WeekDay,
    Day,
}

impl PeriodDay {
    pub fn matches(&self, date: NaiveDate) -> bool {
        let weekday = date.weekday();
        match self {
            PeriodDay::Named(named) => weekday == *named,
            PeriodDay::WeekendDay => matches!(weekday, Weekday::Sat | Weekday::Sun),
            PeriodDay::WeekDay => !matches!(weekday, Weekday::Sat | Weekday::Sun),
            PeriodDay::Day => true,
        }
    }
}

impl std::str::FromStr for PeriodDay {
    type Err = String;

    /// Accepts a weekday name ("monday", "Mon"), "weekend_day", "week_day" or "day".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "weekend_day" | "weekendday" => Ok(PeriodDay::WeekendDay),
            "week_day" | "weekday" => Ok(PeriodDay::WeekDay),
            "day" => Ok(PeriodDay::Day),
            _ => normalized
                .parse::<Weekday>()
                .map(PeriodDay::Named)
                .map_err(|_| format!("Invalid period day: {}", s)),
        }
    }
}

impl fmt::Display for PeriodDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodDay::Named(weekday) => f.write_str(match weekday {
                Weekday::Mon => "monday",
                Weekday::Tue => "tuesday",
                Weekday::Wed => "wednesday",
                Weekday::Thu => "thursday",
                Weekday::Fri => "friday",
                Weekday::Sat => "saturday",
                Weekday::Sun => "sunday",
            }),
            PeriodDay::WeekendDay => f.write_str("weekend_day"),
            PeriodDay::WeekDay => f.write_str("week_day"),
            PeriodDay::Day => f.write_str("day"),
        }
    }
}

impl TryFrom<String> for PeriodDay {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PeriodDay> for String {
    fn from(day: PeriodDay) -> Self {
        day.to_string()
    }
}

impl Schedule {
    /// Create a new builder for Schedule
    pub fn builder(name: impl Into<String>) -> ScheduleBuilder {
        ScheduleBuilder {
            name: name.into(),
            enabled: true,
            end_date: None,
        }
    }
}

/// Builder for Schedule
#[derive(Debug, Clone)]
pub struct ScheduleBuilder {
    name: String,
    enabled: bool,
    end_date: Option<NaiveDateTime>,
}

impl ScheduleBuilder {
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Last instant a recurring schedule may fire at. Ignored by [`ScheduleBuilder::once`].
    pub fn end_date(mut self, end_date: NaiveDateTime) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn once(self, execution_date: NaiveDateTime) -> Schedule {
        self.build(ScheduleKind::Once { execution_date })
    }

    pub fn daily(self, start_date: NaiveDateTime, frequency: DailyFrequency) -> Schedule {
        let bounds = Bounds::new(start_date, self.end_date);
        self.build(ScheduleKind::Daily { bounds, frequency })
    }

    pub fn weekly(
        self,
        start_date: NaiveDateTime,
        every_after_weeks: u32,
        days: impl IntoIterator<Item = Weekday>,
        frequency: DailyFrequency,
    ) -> Schedule {
        let bounds = Bounds::new(start_date, self.end_date);
        self.build(ScheduleKind::Weekly {
            bounds,
            every_after_weeks,
            days: days.into_iter().collect(),
            frequency,
        })
    }

    pub fn monthly_day(
        self,
        start_date: NaiveDateTime,
        every_after_months: u32,
        monthly_day: u32,
        frequency: DailyFrequency,
    ) -> Schedule {
        let bounds = Bounds::new(start_date, self.end_date);
        self.build(ScheduleKind::MonthlyDay {
            bounds,
            every_after_months,
            monthly_day,
            frequency,
        })
    }

    pub fn monthly_period(
        self,
        start_date: NaiveDateTime,
        every_after_months: u32,
        position: MonthlyPosition,
        day: PeriodDay,
        frequency: DailyFrequency,
    ) -> Schedule {
        let bounds = Bounds::new(start_date, self.end_date);
        self.build(ScheduleKind::MonthlyPeriod {
            bounds,
            every_after_months,
            position,
            day,
            frequency,
        })
    }

    fn build(self, kind: ScheduleKind) -> Schedule {
        Schedule {
            name: self.name,
            enabled: self.enabled,
            kind,
        }
    }
}
