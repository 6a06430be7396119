use super::{same_day, SameDay};
use crate::bounds::{
    ensure_ordered, ensure_ordered_against_default, ensure_window, gate, EndInclusivity, Gate,
};
use crate::error::{OccurrenceResult, ScheduleError};
use crate::schedule::{Bounds, DailyFrequency};
use chrono::NaiveDateTime;

/// Next fire of a schedule that runs every calendar day.
///
/// The end date only gates the reference instant; the computed occurrence
/// itself is not checked against it.
pub(super) fn next_occurrence(
    bounds: &Bounds,
    frequency: &DailyFrequency,
    now: NaiveDateTime,
) -> OccurrenceResult {
    match frequency {
        DailyFrequency::Once { .. } => ensure_ordered_against_default(bounds)?,
        DailyFrequency::Recurring(_) => {
            ensure_ordered(bounds)?;
            ensure_window(frequency)?;
        }
    }

    if let Gate::NotStarted(start) = gate(bounds, now, EndInclusivity::Exclusive)? {
        return Ok(start);
    }

    match same_day(frequency, now)? {
        SameDay::At(next) => Ok(next),
        SameDay::Elapsed => {
            let tomorrow = now.date().succ_opt().ok_or(ScheduleError::OutOfRange)?;
            Ok(tomorrow.and_time(frequency.first_time()))
        }
    }
}
