//! # Cadence - Next-Occurrence Computation for Recurrence Rules
//!
//! This library answers one question for a declarative schedule: when does it
//! fire next? It is meant to sit behind a dispatcher that actually runs work;
//! nothing here executes, sleeps, or persists anything.
//!
//! ## Features
//!
//! - **Once**: a single fire at a fixed date and time
//! - **Daily**: every day, at one time or stepped through a time window
//! - **Weekly**: selected weekdays, skipping whole blocks of weeks
//! - **Monthly by day**: a fixed day of the month, every N months
//! - **Monthly by position**: the first/second/third/fourth/last weekday,
//!   weekend day, week day or day of the month, every N months
//! - **Series**: drive any schedule repeatedly to list upcoming fires
//! - **Config support**: load schedule definitions from TOML or YAML
//!
//! ## Quick Start
//!
//! ```rust
//! use cadence::{DailyFrequency, Schedule};
//! use chrono::{NaiveDate, NaiveTime, Weekday};
//!
//! let start = NaiveDate::from_ymd_opt(2023, 11, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let end = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let two_am = NaiveTime::from_hms_opt(2, 0, 0).unwrap();
//!
//! let schedule = Schedule::builder("fortnightly-backup")
//!     .end_date(end)
//!     .weekly(start, 2, [Weekday::Mon], DailyFrequency::once(two_am));
//!
//! let now = NaiveDate::from_ymd_opt(2023, 11, 5).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let next = schedule.next_occurrence(now).unwrap();
//! assert_eq!(next.to_string(), "2023-11-06 02:00:00");
//!
//! for occurrence in schedule.series(now, 6) {
//!     match occurrence {
//!         Ok(at) => println!("fires at {at}"),
//!         Err(reason) => println!("stops: {reason}"),
//!     }
//! }
//! ```
//!
//! ## Configuration
//!
//! Create `config/schedules.toml`:
//!
//! ```toml
//! [[schedules]]
//! name = "month-end-report"
//!
//! [schedules.kind]
//! type = "monthly_period"
//! every_after_months = 1
//! position = "last"
//! day = "week_day"
//!
//! [schedules.kind.bounds]
//! start_date = "2024-01-01T00:00:00"
//!
//! [schedules.kind.frequency]
//! mode = "once"
//! execution_time = "17:00:00"
//! ```
//!
//! and load it with [`load_toml_config`] followed by [`schedules_from_config`].

// Re-export core types
pub use cadence_core::{
    date_of_position, generate_series, is_within_bounds, Bounds, DailyFrequency, EndInclusivity,
    IntervalUnit, MonthlyPosition, OccurrenceResult, PeriodDay, Recurrence, Schedule,
    ScheduleBuilder, ScheduleError, ScheduleKind, TimeWindow, YearMonth,
};

// Re-export config loading
pub use cadence_core::{
    config_from_str, load_toml_config, load_yaml_config, schedules_from_config, FileFormat,
};

// Make cadence_core available for lower-level helpers
pub use cadence_core;
