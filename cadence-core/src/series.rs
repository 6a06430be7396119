use crate::engine::Recurrence;
use crate::error::OccurrenceResult;
use crate::schedule::Schedule;
use chrono::NaiveDateTime;
use tracing::debug;

/// Drive `rule` `count` times starting from `now`.
///
/// Each successful occurrence becomes the reference instant of the next step.
/// A failed step leaves the reference instant where it was, so once a step
/// fails every remaining slot repeats the same error.
pub fn generate_series<R: Recurrence + ?Sized>(
    rule: &R,
    now: NaiveDateTime,
    count: usize,
) -> Vec<OccurrenceResult> {
    let mut reference = now;
    let mut series = Vec::with_capacity(count);

    for _ in 0..count {
        let result = rule.next_occurrence(reference);
        if let Ok(next) = result {
            reference = next;
        }
        series.push(result);
    }

    series
}

impl Schedule {
    /// The next `count` occurrences from `now`, see [`generate_series`].
    pub fn series(&self, now: NaiveDateTime, count: usize) -> Vec<OccurrenceResult> {
        debug!(schedule = %self.name, %now, count, "Generating occurrence series");
        generate_series(self, now, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScheduleError;
    use chrono::{NaiveDate, TimeDelta};
    use std::cell::RefCell;

    fn dt(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    /// Fires hourly until `last`, recording every reference instant it sees.
    struct Hourly {
        last: NaiveDateTime,
        seen: RefCell<Vec<NaiveDateTime>>,
    }

    impl Recurrence for Hourly {
        fn next_occurrence(&self, now: NaiveDateTime) -> OccurrenceResult {
            self.seen.borrow_mut().push(now);
            let next = now + TimeDelta::hours(1);
            if next <= self.last {
                Ok(next)
            } else {
                Err(ScheduleError::PastEndDate)
            }
        }
    }

    #[test]
    fn length_is_exact() {
        let rule = Hourly { last: dt(23), seen: RefCell::default() };
        assert_eq!(generate_series(&rule, dt(0), 0).len(), 0);
        assert_eq!(generate_series(&rule, dt(0), 5).len(), 5);
    }

    #[test]
    fn successes_feed_the_next_step() {
        let rule = Hourly { last: dt(23), seen: RefCell::default() };
        let series = generate_series(&rule, dt(0), 3);
        assert_eq!(series, vec![Ok(dt(1)), Ok(dt(2)), Ok(dt(3))]);
        assert_eq!(*rule.seen.borrow(), vec![dt(0), dt(1), dt(2)]);
    }

    #[test]
    fn errors_do_not_advance_the_reference() {
        let rule = Hourly { last: dt(2), seen: RefCell::default() };
        let series = generate_series(&rule, dt(0), 5);
        assert_eq!(
            series,
            vec![
                Ok(dt(1)),
                Ok(dt(2)),
                Err(ScheduleError::PastEndDate),
                Err(ScheduleError::PastEndDate),
                Err(ScheduleError::PastEndDate),
            ]
        );
        assert_eq!(*rule.seen.borrow(), vec![dt(0), dt(1), dt(2), dt(2), dt(2)]);
    }
}
