use crate::error::{OccurrenceResult, ScheduleError};
use chrono::NaiveDateTime;

pub(super) fn next_occurrence(
    execution_date: NaiveDateTime,
    now: NaiveDateTime,
) -> OccurrenceResult {
    let pending = now.date() < execution_date.date()
        || (now.date() == execution_date.date() && now.time() < execution_date.time());

    if pending {
        Ok(execution_date)
    } else {
        Err(ScheduleError::PastExecutionDate)
    }
}
