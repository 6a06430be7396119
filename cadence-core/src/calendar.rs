//! Month arithmetic on the proleptic Gregorian calendar.

use chrono::{Datelike, NaiveDate};

/// Number of days in the given month, `None` if the month is not representable.
pub fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    u32::try_from(next_first.signed_duration_since(first).num_days()).ok()
}

/// A calendar month, ordered chronologically.
///
/// Month blocks are always derived from an anchor by adding whole months to
/// the month index, and the day is resolved last, so a day clamped in a short
/// month (the 31st in April) never drags later months with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Months elapsed since January of year 0.
    pub fn index(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    pub fn from_index(index: i64) -> Option<Self> {
        let year = i32::try_from(index.div_euclid(12)).ok()?;
        let month = u32::try_from(index.rem_euclid(12)).ok()? + 1;
        Some(Self { year, month })
    }

    /// Signed number of months from `self` to `other`.
    pub fn months_until(&self, other: YearMonth) -> i64 {
        other.index() - self.index()
    }

    pub fn plus_months(&self, months: i64) -> Option<Self> {
        Self::from_index(self.index().checked_add(months)?)
    }

    pub fn last_day(&self) -> Option<u32> {
        last_day_of_month(self.year, self.month)
    }

    /// The given day of this month, clamped to the month's last day.
    pub fn day_clamped(&self, day: u32) -> Option<NaiveDate> {
        let day = day.clamp(1, self.last_day()?);
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Every date of the month in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let year = self.year;
        let month = self.month;
        let last = self.last_day().unwrap_or(0);
        (1..=last).filter_map(move |day| NaiveDate::from_ymd_opt(year, month, day))
    }
}
