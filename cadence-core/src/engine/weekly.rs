use super::{same_day, SameDay};
use crate::bounds::{ensure_before_end, ensure_ordered, ensure_window, gate, EndInclusivity, Gate};
use crate::error::{OccurrenceResult, ScheduleError};
use crate::schedule::{Bounds, DailyFrequency};
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};
use std::collections::HashSet;

/// Seven consecutive dates counted from the schedule's start date. Not
/// aligned to calendar weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WeekWindow {
    first: NaiveDate,
}

impl WeekWindow {
    /// The window holding `today`, or the first window beginning after it
    /// when `today` falls in a skipped week.
    fn relevant(start: NaiveDate, every_after_weeks: u32, today: NaiveDate) -> Option<Self> {
        let period = i64::from(every_after_weeks) * 7;
        let elapsed = today.signed_duration_since(start).num_days();
        if elapsed < 0 {
            return Some(Self { first: start });
        }

        let offset = u64::try_from(elapsed / period * period).ok()?;
        let window = Self {
            first: start.checked_add_days(Days::new(offset))?,
        };
        if window.contains(today) {
            Some(window)
        } else {
            window.advance(every_after_weeks)
        }
    }

    fn contains(&self, date: NaiveDate) -> bool {
        let offset = date.signed_duration_since(self.first).num_days();
        (0..7).contains(&offset)
    }

    fn advance(&self, every_after_weeks: u32) -> Option<Self> {
        let days = u64::from(every_after_weeks) * 7;
        Some(Self {
            first: self.first.checked_add_days(Days::new(days))?,
        })
    }

    fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let first = self.first;
        (0..7).filter_map(move |offset| first.checked_add_days(Days::new(offset)))
    }
}

pub(super) fn next_occurrence(
    bounds: &Bounds,
    every_after_weeks: u32,
    days: &HashSet<Weekday>,
    frequency: &DailyFrequency,
    now: NaiveDateTime,
) -> OccurrenceResult {
    ensure_ordered(bounds)?;
    ensure_window(frequency)?;
    if every_after_weeks == 0 {
        return Err(ScheduleError::InvalidWeekInterval);
    }
    if days.is_empty() {
        return Err(ScheduleError::NoWeekdaysSelected);
    }

    if let Gate::NotStarted(start) = gate(bounds, now, EndInclusivity::Inclusive)? {
        return Ok(start);
    }

    let today = now.date();
    let selected = |date: &NaiveDate| days.contains(&date.weekday());
    let window = WeekWindow::relevant(bounds.start_date.date(), every_after_weeks, today)
        .ok_or(ScheduleError::OutOfRange)?;
    let first_time = frequency.first_time();

    if window.first > today {
        let date = window.dates().find(selected).ok_or(ScheduleError::NoWeekdaysSelected)?;
        return ensure_before_end(bounds, date.and_time(first_time));
    }

    if selected(&today) {
        if let SameDay::At(next) = same_day(frequency, now)? {
            return ensure_before_end(bounds, next);
        }
    }

    // A window holds every weekday exactly once, so when the rest of the
    // current window has no selected day the next window always has one.
    let date = match window.dates().filter(|date| *date > today).find(selected) {
        Some(date) => date,
        None => window
            .advance(every_after_weeks)
            .ok_or(ScheduleError::OutOfRange)?
            .dates()
            .find(selected)
            .ok_or(ScheduleError::NoWeekdaysSelected)?,
    };
    ensure_before_end(bounds, date.and_time(first_time))
}
