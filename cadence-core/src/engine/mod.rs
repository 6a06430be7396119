mod daily;
mod monthly;
mod once;
mod weekly;

pub use monthly::date_of_position;

use crate::bounds::ensure_enabled;
use crate::error::{OccurrenceResult, ScheduleError};
use crate::schedule::{DailyFrequency, Schedule, ScheduleKind};
use chrono::NaiveDateTime;
use tracing::{debug, trace};

/// Anything that can compute its next fire time from a reference instant.
///
/// Implementations must be pure: the same rule and reference instant always
/// yield the same result.
pub trait Recurrence {
    fn next_occurrence(&self, now: NaiveDateTime) -> OccurrenceResult;
}

impl<R: Recurrence + ?Sized> Recurrence for &R {
    fn next_occurrence(&self, now: NaiveDateTime) -> OccurrenceResult {
        (**self).next_occurrence(now)
    }
}

impl Schedule {
    /// Compute the next occurrence on or after `now`.
    ///
    /// A disabled schedule fails with [`ScheduleError::Cancelled`] before any
    /// date logic runs. When `now` precedes a recurring schedule's start date,
    /// the start date is returned unchanged and the caller is expected to ask
    /// again from there.
    pub fn next_occurrence(&self, now: NaiveDateTime) -> OccurrenceResult {
        let result = ensure_enabled(self.enabled).and_then(|()| self.dispatch(now));

        match &result {
            Ok(next) => trace!(schedule = %self.name, %now, %next, "Computed next occurrence"),
            Err(error) => debug!(schedule = %self.name, %now, %error, "No next occurrence"),
        }

        result
    }

    fn dispatch(&self, now: NaiveDateTime) -> OccurrenceResult {
        match &self.kind {
            ScheduleKind::Once { execution_date } => once::next_occurrence(*execution_date, now),
            ScheduleKind::Daily { bounds, frequency } => {
                daily::next_occurrence(bounds, frequency, now)
            }
            ScheduleKind::Weekly {
                bounds,
                every_after_weeks,
                days,
                frequency,
            } => weekly::next_occurrence(bounds, *every_after_weeks, days, frequency, now),
            ScheduleKind::MonthlyDay {
                bounds,
                every_after_months,
                monthly_day,
                frequency,
            } => monthly::next_on_day(bounds, *every_after_months, *monthly_day, frequency, now),
            ScheduleKind::MonthlyPeriod {
                bounds,
                every_after_months,
                position,
                day,
                frequency,
            } => monthly::next_on_position(
                bounds,
                *every_after_months,
                *position,
                *day,
                frequency,
                now,
            ),
        }
    }
}

impl Recurrence for Schedule {
    fn next_occurrence(&self, now: NaiveDateTime) -> OccurrenceResult {
        Schedule::next_occurrence(self, now)
    }
}

/// What is left of a firing day once `now` has been reached on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SameDay {
    /// Another fire is due, normally later on the same day.
    At(NaiveDateTime),
    /// Nothing more fires today; the next fire is on a later day.
    Elapsed,
}

/// Next fire on `now`'s own day, assuming that day is one the schedule runs on.
///
/// A single-fire day is still pending while `now` is strictly before the
/// execution time. A window is pending before `starting_time`; inside the
/// window the next fire is one step after `now`, even when that step lands
/// past `ending_time` or on the following day.
pub(crate) fn same_day(
    frequency: &DailyFrequency,
    now: NaiveDateTime,
) -> Result<SameDay, ScheduleError> {
    let time = now.time();
    match frequency {
        DailyFrequency::Once { execution_time } => Ok(if time < *execution_time {
            SameDay::At(now.date().and_time(*execution_time))
        } else {
            SameDay::Elapsed
        }),
        DailyFrequency::Recurring(window) => {
            if time < window.starting_time {
                return Ok(SameDay::At(now.date().and_time(window.starting_time)));
            }
            if time >= window.ending_time {
                return Ok(SameDay::Elapsed);
            }
            let stepped = window
                .interval_unit
                .step(now, window.every_after)
                .ok_or(ScheduleError::OutOfRange)?;
            Ok(SameDay::At(stepped))
        }
    }
}
