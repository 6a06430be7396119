//! Checks shared by every recurring pattern: enable flag, `[start, end]`
//! range and the sub-day window.

use crate::error::ScheduleError;
use crate::schedule::{Bounds, DailyFrequency};
use chrono::NaiveDateTime;

/// How an instant on the same calendar day as the end date is compared
/// against the end date's time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndInclusivity {
    /// Same-day instants up to and including the end time are in bounds.
    Inclusive,
    /// Same-day instants must be strictly before the end time.
    Exclusive,
}

/// Whether `candidate` may still fire given an optional `end_date`.
pub fn is_within_bounds(
    end_date: Option<NaiveDateTime>,
    candidate: NaiveDateTime,
    inclusivity: EndInclusivity,
) -> bool {
    let Some(end) = end_date else {
        return true;
    };
    if candidate.date() < end.date() {
        return true;
    }
    if candidate.date() > end.date() {
        return false;
    }
    match inclusivity {
        EndInclusivity::Inclusive => candidate.time() <= end.time(),
        EndInclusivity::Exclusive => candidate.time() < end.time(),
    }
}

/// Outcome of the checks every recurring engine runs before any calendar logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Gate {
    /// The reference instant precedes the start date, which is returned as-is.
    NotStarted(NaiveDateTime),
    Open,
}

pub(crate) fn ensure_enabled(enabled: bool) -> Result<(), ScheduleError> {
    if enabled {
        Ok(())
    } else {
        Err(ScheduleError::Cancelled)
    }
}

/// `start_date` may not be later than a present `end_date`.
pub(crate) fn ensure_ordered(bounds: &Bounds) -> Result<(), ScheduleError> {
    match bounds.end_date {
        Some(end) if bounds.start_date > end => Err(ScheduleError::InvalidBounds),
        _ => Ok(()),
    }
}

/// Like [`ensure_ordered`], but a missing end date compares as the earliest
/// representable instant, so any start date is rejected without one.
pub(crate) fn ensure_ordered_against_default(bounds: &Bounds) -> Result<(), ScheduleError> {
    if bounds.start_date > bounds.end_date.unwrap_or(NaiveDateTime::MIN) {
        Err(ScheduleError::InvalidBounds)
    } else {
        Ok(())
    }
}

pub(crate) fn ensure_window(frequency: &DailyFrequency) -> Result<(), ScheduleError> {
    match frequency {
        DailyFrequency::Once { .. } => Ok(()),
        DailyFrequency::Recurring(window) => {
            if window.starting_time >= window.ending_time {
                Err(ScheduleError::InvalidTimeWindow)
            } else if window.every_after == 0 {
                Err(ScheduleError::InvalidInterval)
            } else {
                Ok(())
            }
        }
    }
}

/// Start/end gate on the reference instant itself.
pub(crate) fn gate(
    bounds: &Bounds,
    now: NaiveDateTime,
    inclusivity: EndInclusivity,
) -> Result<Gate, ScheduleError> {
    if now < bounds.start_date {
        return Ok(Gate::NotStarted(bounds.start_date));
    }
    if !is_within_bounds(bounds.end_date, now, inclusivity) {
        return Err(ScheduleError::PastEndDate);
    }
    Ok(Gate::Open)
}

/// Reject a computed occurrence that lands after the end date.
pub(crate) fn ensure_before_end(
    bounds: &Bounds,
    candidate: NaiveDateTime,
) -> Result<NaiveDateTime, ScheduleError> {
    if is_within_bounds(bounds.end_date, candidate, EndInclusivity::Inclusive) {
        Ok(candidate)
    } else {
        Err(ScheduleError::PastEndDate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d).unwrap().and_hms_opt(h, mi, 0).unwrap()
    }

    #[test]
    fn absent_end_is_unbounded() {
        assert!(is_within_bounds(None, dt(9999, 1, 1, 0, 0), EndInclusivity::Exclusive));
    }

    #[test]
    fn earlier_and_later_days() {
        let end = Some(dt(2023, 12, 31, 0, 0));
        assert!(is_within_bounds(end, dt(2023, 12, 30, 23, 59), EndInclusivity::Exclusive));
        assert!(!is_within_bounds(end, dt(2024, 1, 1, 0, 0), EndInclusivity::Inclusive));
    }

    #[test]
    fn same_day_inclusivity() {
        let end = Some(dt(2023, 12, 31, 12, 0));
        let at_end = dt(2023, 12, 31, 12, 0);
        assert!(is_within_bounds(end, at_end, EndInclusivity::Inclusive));
        assert!(!is_within_bounds(end, at_end, EndInclusivity::Exclusive));
        assert!(is_within_bounds(end, dt(2023, 12, 31, 11, 59), EndInclusivity::Exclusive));
        assert!(!is_within_bounds(end, dt(2023, 12, 31, 12, 1), EndInclusivity::Inclusive));
    }

    #[test]
    fn ordering_against_default_rejects_missing_end() {
        let unbounded = Bounds::new(dt(2023, 1, 1, 0, 0), None);
        assert_eq!(ensure_ordered(&unbounded), Ok(()));
        assert_eq!(ensure_ordered_against_default(&unbounded), Err(ScheduleError::InvalidBounds));
    }

    #[test]
    fn gate_returns_start_before_it_begins() {
        let bounds = Bounds::new(dt(2023, 1, 1, 5, 0), Some(dt(2023, 2, 1, 0, 0)));
        assert_eq!(
            gate(&bounds, dt(2022, 12, 31, 0, 0), EndInclusivity::Inclusive),
            Ok(Gate::NotStarted(dt(2023, 1, 1, 5, 0)))
        );
        assert_eq!(gate(&bounds, dt(2023, 1, 15, 0, 0), EndInclusivity::Inclusive), Ok(Gate::Open));
        assert_eq!(
            gate(&bounds, dt(2023, 2, 2, 0, 0), EndInclusivity::Inclusive),
            Err(ScheduleError::PastEndDate)
        );
    }
}
