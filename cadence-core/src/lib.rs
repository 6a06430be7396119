//! Cadence Core - next-occurrence computation for recurrence rules
//!
//! This crate computes when a schedule fires next. It never executes
//! anything and holds no state between calls: every computation is a pure
//! function of a [`Schedule`] and a reference instant.

pub mod bounds;
pub mod calendar;
pub mod config;
mod engine;
mod error;
mod interval_unit;
mod schedule;
mod series;

// Re-export public API
pub use ::config::FileFormat;
pub use bounds::{is_within_bounds, EndInclusivity};
pub use calendar::YearMonth;
pub use self::config::{config_from_str, load_toml_config, load_yaml_config, schedules_from_config};
pub use engine::{date_of_position, Recurrence};
pub use error::{OccurrenceResult, ScheduleError};
pub use interval_unit::IntervalUnit;
pub use schedule::{
    Bounds, DailyFrequency, MonthlyPosition, PeriodDay, Schedule, ScheduleBuilder, ScheduleKind,
    TimeWindow,
};
pub use series::generate_series;
