use crate::config::Config;
use chrono_tz::Tz;
use std::path::PathBuf;

/// Handlers share configuration only; every request reloads the snapshot.
#[derive(Clone)]
pub struct AppState {
    pub snapshot_path: PathBuf,
    pub timezone: Tz,
}

impl AppState {
    pub fn new(snapshot_path: PathBuf, timezone: Tz) -> Self {
        Self {
            snapshot_path,
            timezone,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.snapshot_path.clone(), config.timezone)
    }
}
