use cadence::{DailyFrequency, IntervalUnit, MonthlyPosition, PeriodDay, Schedule, ScheduleError};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};

fn dt(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, mi, s).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn fortnightly_mondays_until_end_date() {
    let schedule = Schedule::builder("fortnightly")
        .end_date(dt(2023, 12, 31, 0, 0, 0))
        .weekly(dt(2023, 11, 1, 0, 0, 0), 2, [Weekday::Mon], DailyFrequency::once(time(2, 0)));

    let series = schedule.series(dt(2023, 11, 5, 0, 0, 0), 6);

    assert_eq!(
        series,
        vec![
            Ok(dt(2023, 11, 6, 2, 0, 0)),
            Ok(dt(2023, 11, 20, 2, 0, 0)),
            Ok(dt(2023, 12, 4, 2, 0, 0)),
            Ok(dt(2023, 12, 18, 2, 0, 0)),
            Err(ScheduleError::PastEndDate),
            Err(ScheduleError::PastEndDate),
        ]
    );
}

#[test]
fn hourly_window_never_leaves_sub_hour_remainders() {
    let schedule = Schedule::builder("hourly")
        .end_date(dt(2023, 12, 31, 0, 0, 0))
        .daily(
            dt(2023, 11, 1, 0, 0, 0),
            DailyFrequency::recurring(1, IntervalUnit::Hours, time(2, 0), time(5, 0)),
        );

    assert_eq!(schedule.next_occurrence(dt(2023, 11, 5, 2, 0, 0)), Ok(dt(2023, 11, 5, 3, 0, 0)));

    let series = schedule.series(dt(2023, 11, 5, 1, 17, 42), 6);
    assert_eq!(
        series,
        vec![
            Ok(dt(2023, 11, 5, 2, 0, 0)),
            Ok(dt(2023, 11, 5, 3, 0, 0)),
            Ok(dt(2023, 11, 5, 4, 0, 0)),
            Ok(dt(2023, 11, 5, 5, 0, 0)),
            Ok(dt(2023, 11, 6, 2, 0, 0)),
            Ok(dt(2023, 11, 6, 3, 0, 0)),
        ]
    );
}

#[test]
fn window_step_can_fire_after_ending_time() {
    let schedule = Schedule::builder("two-hourly")
        .end_date(dt(2023, 12, 31, 0, 0, 0))
        .daily(
            dt(2023, 11, 1, 0, 0, 0),
            DailyFrequency::recurring(2, IntervalUnit::Hours, time(2, 0), time(5, 0)),
        );

    assert_eq!(
        schedule.series(dt(2023, 11, 5, 1, 0, 0), 5),
        vec![
            Ok(dt(2023, 11, 5, 2, 0, 0)),
            Ok(dt(2023, 11, 5, 4, 0, 0)),
            Ok(dt(2023, 11, 5, 6, 0, 0)),
            Ok(dt(2023, 11, 6, 2, 0, 0)),
            Ok(dt(2023, 11, 6, 4, 0, 0)),
        ]
    );
}

#[test]
fn late_window_step_crosses_midnight() {
    let schedule = Schedule::builder("late-night").daily(
        dt(2023, 11, 1, 0, 0, 0),
        DailyFrequency::recurring(1, IntervalUnit::Hours, time(22, 0), time(23, 59)),
    );

    assert_eq!(
        schedule.series(dt(2023, 11, 5, 23, 30, 0), 3),
        vec![
            Ok(dt(2023, 11, 6, 0, 0, 0)),
            Ok(dt(2023, 11, 6, 22, 0, 0)),
            Ok(dt(2023, 11, 6, 23, 0, 0)),
        ]
    );
}

#[test]
fn monthly_fifteenth() {
    let schedule = Schedule::builder("mid-month").monthly_day(
        dt(2020, 1, 1, 0, 0, 0),
        1,
        15,
        DailyFrequency::once(time(2, 0)),
    );

    assert_eq!(schedule.next_occurrence(dt(2020, 6, 3, 18, 0, 0)), Ok(dt(2020, 6, 15, 2, 0, 0)));
    assert_eq!(schedule.next_occurrence(dt(2020, 6, 15, 2, 0, 0)), Ok(dt(2020, 7, 15, 2, 0, 0)));

    let quarterly = Schedule::builder("quarterly").monthly_day(
        dt(2020, 1, 1, 0, 0, 0),
        3,
        15,
        DailyFrequency::once(time(2, 0)),
    );
    assert_eq!(
        quarterly.series(dt(2020, 1, 15, 2, 0, 0), 3),
        vec![
            Ok(dt(2020, 4, 15, 2, 0, 0)),
            Ok(dt(2020, 7, 15, 2, 0, 0)),
            Ok(dt(2020, 10, 15, 2, 0, 0)),
        ]
    );
}

#[test]
fn last_weekday_of_each_month() {
    let schedule = Schedule::builder("month-end").monthly_period(
        dt(2024, 1, 1, 0, 0, 0),
        1,
        MonthlyPosition::Last,
        PeriodDay::WeekDay,
        DailyFrequency::once(time(17, 0)),
    );

    assert_eq!(
        schedule.series(dt(2024, 1, 1, 0, 0, 0), 4),
        vec![
            Ok(dt(2024, 1, 31, 17, 0, 0)),
            Ok(dt(2024, 2, 29, 17, 0, 0)),
            Ok(dt(2024, 3, 29, 17, 0, 0)),
            Ok(dt(2024, 4, 30, 17, 0, 0)),
        ]
    );
}

#[test]
fn start_date_is_returned_before_the_schedule_begins() {
    let schedule = Schedule::builder("later").monthly_day(
        dt(2024, 5, 20, 8, 30, 0),
        1,
        15,
        DailyFrequency::once(time(2, 0)),
    );

    assert_eq!(
        schedule.series(dt(2024, 1, 1, 0, 0, 0), 3),
        vec![
            Ok(dt(2024, 5, 20, 8, 30, 0)),
            Ok(dt(2024, 6, 15, 2, 0, 0)),
            Ok(dt(2024, 7, 15, 2, 0, 0)),
        ]
    );
}

#[test]
fn once_fires_a_single_time() {
    let schedule = Schedule::builder("launch").once(dt(2024, 3, 1, 9, 30, 0));

    assert_eq!(
        schedule.series(dt(2024, 3, 1, 9, 0, 0), 3),
        vec![
            Ok(dt(2024, 3, 1, 9, 30, 0)),
            Err(ScheduleError::PastExecutionDate),
            Err(ScheduleError::PastExecutionDate),
        ]
    );
}

#[test]
fn disabled_schedule_is_cancelled_everywhere() {
    let schedule = Schedule::builder("paused")
        .enabled(false)
        .once(dt(2024, 3, 1, 9, 30, 0));

    let series = schedule.series(dt(2020, 1, 1, 0, 0, 0), 4);
    assert!(series.iter().all(|r| *r == Err(ScheduleError::Cancelled)));
    assert_eq!(
        series[0].unwrap_err().to_string(),
        "Schedule was cancelled!"
    );
}

#[test]
fn configuration_errors_are_sticky() {
    let schedule = Schedule::builder("backwards")
        .end_date(dt(2023, 1, 1, 0, 0, 0))
        .weekly(dt(2023, 6, 1, 0, 0, 0), 1, [Weekday::Fri], DailyFrequency::once(time(2, 0)));

    let series = schedule.series(dt(2023, 3, 1, 0, 0, 0), 3);
    assert_eq!(series, vec![Err(ScheduleError::InvalidBounds); 3]);
    assert_eq!(
        ScheduleError::InvalidBounds.to_string(),
        "Start date can't be later than end date"
    );
}
