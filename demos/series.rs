use cadence::{DailyFrequency, IntervalUnit, MonthlyPosition, PeriodDay, Schedule};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};

fn at(
    y: i32,
    m: u32,
    d: u32,
    h: u32,
    mi: u32,
) -> Result<NaiveDateTime, Box<dyn std::error::Error>> {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, mi, 0))
        .ok_or_else(|| format!("invalid date {y}-{m}-{d} {h}:{mi}").into())
}

fn time(h: u32, m: u32) -> Result<NaiveTime, Box<dyn std::error::Error>> {
    NaiveTime::from_hms_opt(h, m, 0).ok_or_else(|| format!("invalid time {h}:{m}").into())
}

fn print_series(schedule: &Schedule, now: NaiveDateTime, count: usize) {
    println!("📅 {} (from {now})", schedule.name);
    for occurrence in schedule.series(now, count) {
        match occurrence {
            Ok(next) => println!("   ✅ {next}"),
            Err(reason) => println!("   ⛔ {reason}"),
        }
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set RUST_LOG=trace to see every computed occurrence
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .with_target(false)
        .init();

    println!("🚀 Listing upcoming occurrences...\n");

    let fortnightly = Schedule::builder("fortnightly-backup")
        .end_date(at(2023, 12, 31, 0, 0)?)
        .weekly(at(2023, 11, 1, 0, 0)?, 2, [Weekday::Mon], DailyFrequency::once(time(2, 0)?));
    print_series(&fortnightly, at(2023, 11, 5, 0, 0)?, 6);

    let business_hours = Schedule::builder("business-hours-poll").daily(
        at(2024, 1, 1, 0, 0)?,
        DailyFrequency::recurring(90, IntervalUnit::Minutes, time(9, 0)?, time(17, 0)?),
    );
    print_series(&business_hours, at(2024, 1, 1, 15, 0)?, 6);

    let month_end = Schedule::builder("month-end-report").monthly_period(
        at(2024, 1, 1, 0, 0)?,
        1,
        MonthlyPosition::Last,
        PeriodDay::WeekDay,
        DailyFrequency::once(time(17, 0)?),
    );
    print_series(&month_end, at(2024, 1, 1, 0, 0)?, 6);

    let month_tail = Schedule::builder("thirty-first").monthly_day(
        at(2024, 1, 1, 0, 0)?,
        1,
        31,
        DailyFrequency::once(time(23, 0)?),
    );
    print_series(&month_tail, at(2024, 1, 1, 0, 0)?, 4);

    let launch = Schedule::builder("launch").once(at(2024, 3, 1, 9, 30)?);
    print_series(&launch, at(2024, 2, 1, 0, 0)?, 3);

    Ok(())
}
