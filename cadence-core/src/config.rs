//! Loading schedule definitions from configuration files.
//!
//! Definitions live under a top-level `schedules` array:
//!
//! ```toml
//! [[schedules]]
//! name = "nightly-backup"
//!
//! [schedules.kind]
//! type = "weekly"
//! every_after_weeks = 2
//! days = ["Mon"]
//!
//! [schedules.kind.bounds]
//! start_date = "2023-11-01T00:00:00"
//! end_date = "2023-12-31T00:00:00"
//!
//! [schedules.kind.frequency]
//! mode = "once"
//! execution_time = "02:00:00"
//! ```

use crate::schedule::Schedule;
use ::config::{Config, ConfigError, Environment, File, FileFormat};
use std::path::Path;
use tracing::debug;

const ENV_PREFIX: &str = "CADENCE";

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).prefix_separator("_").separator("__")
}

/// Load config from a specific TOML file, overlaid with `CADENCE_*` environment variables
pub fn load_toml_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    Config::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .add_source(environment())
        .build()
}

/// Load config from a specific YAML file, overlaid with `CADENCE_*` environment variables
pub fn load_yaml_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    Config::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Yaml))
        .add_source(environment())
        .build()
}

/// Build config from an in-memory document, without any environment overlay
pub fn config_from_str(source: &str, format: FileFormat) -> Result<Config, ConfigError> {
    Config::builder().add_source(File::from_str(source, format)).build()
}

/// Deserialize every entry of the `schedules` array
pub fn schedules_from_config(config: &Config) -> Result<Vec<Schedule>, ConfigError> {
    let schedules: Vec<Schedule> = config.get("schedules")?;
    debug!(schedules = schedules.len(), "Loaded schedule definitions");
    Ok(schedules)
}
