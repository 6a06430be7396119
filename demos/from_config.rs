use cadence::{load_toml_config, schedules_from_config};
use chrono::NaiveDate;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string()))
        .with_target(false)
        .init();

    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../demos/config/schedules.toml");
    println!("📝 Loading schedules from {path}\n");

    let config = load_toml_config(path)?;
    let schedules = schedules_from_config(&config)?;

    let now = NaiveDate::from_ymd_opt(2023, 11, 5)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or("invalid reference instant")?;

    for schedule in &schedules {
        let state = if schedule.enabled { "enabled" } else { "disabled" };
        println!("📅 {} ({state})", schedule.name);
        for occurrence in schedule.series(now, 5) {
            match occurrence {
                Ok(next) => println!("   ✅ {next}"),
                Err(reason) => println!("   ⛔ {reason}"),
            }
        }
        println!();
    }

    Ok(())
}
