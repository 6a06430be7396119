use super::{same_day, SameDay};
use crate::bounds::{ensure_before_end, ensure_ordered, ensure_window, gate, EndInclusivity, Gate};
use crate::calendar::YearMonth;
use crate::error::{OccurrenceResult, ScheduleError};
use crate::schedule::{Bounds, DailyFrequency, MonthlyPosition, PeriodDay};
use chrono::{Datelike, NaiveDate, NaiveDateTime};

fn ensure_monthly(
    bounds: &Bounds,
    every_after_months: u32,
    frequency: &DailyFrequency,
) -> Result<(), ScheduleError> {
    ensure_ordered(bounds)?;
    ensure_window(frequency)?;
    if every_after_months == 0 {
        return Err(ScheduleError::InvalidMonthInterval);
    }
    Ok(())
}

/// Month of the first fire of a day-of-month schedule: the start month when
/// the day has not passed yet, the following month otherwise.
fn exact_starting_month(start: NaiveDate, monthly_day: u32) -> Option<YearMonth> {
    let month = YearMonth::of(start);
    if monthly_day >= start.day() {
        Some(month)
    } else {
        month.plus_months(1)
    }
}

pub(super) fn next_on_day(
    bounds: &Bounds,
    every_after_months: u32,
    monthly_day: u32,
    frequency: &DailyFrequency,
    now: NaiveDateTime,
) -> OccurrenceResult {
    ensure_monthly(bounds, every_after_months, frequency)?;
    if !(1..=31).contains(&monthly_day) {
        return Err(ScheduleError::InvalidMonthDay);
    }

    if let Gate::NotStarted(start) = gate(bounds, now, EndInclusivity::Inclusive)? {
        return Ok(start);
    }

    let today = now.date();
    let step = i64::from(every_after_months);
    let anchor = exact_starting_month(bounds.start_date.date(), monthly_day)
        .ok_or(ScheduleError::OutOfRange)?;
    let fire_on = |month: YearMonth| {
        month
            .day_clamped(monthly_day)
            .ok_or(ScheduleError::OutOfRange)
    };

    // Jump straight to the last block not after today's month; one more
    // block is then always enough to reach or pass today.
    let elapsed = anchor.months_until(YearMonth::of(today)).max(0);
    let mut block = anchor.plus_months(elapsed / step * step).ok_or(ScheduleError::OutOfRange)?;
    let mut date = fire_on(block)?;
    if date < today {
        block = block.plus_months(step).ok_or(ScheduleError::OutOfRange)?;
        date = fire_on(block)?;
    }

    let candidate = if date > today {
        date.and_time(frequency.first_time())
    } else {
        match same_day(frequency, now)? {
            SameDay::At(next) => next,
            SameDay::Elapsed => {
                let following = block.plus_months(step).ok_or(ScheduleError::OutOfRange)?;
                fire_on(following)?.and_time(frequency.first_time())
            }
        }
    };
    ensure_before_end(bounds, candidate)
}

/// Resolve a positional day within a month.
///
/// Weekday, weekend-day and week-day kinds are resolved by listing every
/// matching date of the month and picking the `position`-th one, or the final
/// one for [`MonthlyPosition::Last`]. [`PeriodDay::Day`] instead maps the
/// positions to the fixed days 1 to 4 and the month's last day.
pub fn date_of_position(
    position: MonthlyPosition,
    day: PeriodDay,
    month: YearMonth,
) -> Option<NaiveDate> {
    if day == PeriodDay::Day {
        let day_number = match position.index() {
            Some(index) => u32::try_from(index).ok()? + 1,
            None => month.last_day()?,
        };
        return NaiveDate::from_ymd_opt(month.year(), month.month(), day_number);
    }

    let mut matching = month.dates().filter(|date| day.matches(*date));
    match position.index() {
        Some(index) => matching.nth(index),
        None => matching.last(),
    }
}

pub(super) fn next_on_position(
    bounds: &Bounds,
    every_after_months: u32,
    position: MonthlyPosition,
    day: PeriodDay,
    frequency: &DailyFrequency,
    now: NaiveDateTime,
) -> OccurrenceResult {
    ensure_monthly(bounds, every_after_months, frequency)?;

    if let Gate::NotStarted(start) = gate(bounds, now, EndInclusivity::Inclusive)? {
        return Ok(start);
    }

    let today = now.date();
    let step = i64::from(every_after_months);
    let anchor = YearMonth::of(bounds.start_date.date());
    let resolve = |month: YearMonth| {
        date_of_position(position, day, month).ok_or(ScheduleError::InvalidMonthDay)
    };

    // First block whose month is today's month or later.
    let elapsed = anchor.months_until(YearMonth::of(today)).max(0);
    let blocks = (elapsed + step - 1) / step;
    let block = anchor.plus_months(blocks * step).ok_or(ScheduleError::OutOfRange)?;
    let target = resolve(block)?;

    let roll_over = || -> OccurrenceResult {
        let following = block.plus_months(step).ok_or(ScheduleError::OutOfRange)?;
        Ok(resolve(following)?.and_time(frequency.first_time()))
    };

    let candidate = if today < target {
        target.and_time(frequency.first_time())
    } else if today == target {
        match same_day(frequency, now)? {
            SameDay::At(next) => next,
            SameDay::Elapsed => roll_over()?,
        }
    } else {
        roll_over()?
    };
    ensure_before_end(bounds, candidate)
}
