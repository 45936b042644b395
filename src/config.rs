use crate::errors::ConfigError;
use chrono_tz::Tz;
use std::{env, net::IpAddr, net::SocketAddr, path::PathBuf};

pub const DEFAULT_SNAPSHOT_PATH: &str = "projections/weekly_matchups.json";
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::New_York;
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub snapshot_path: PathBuf,
    /// Zone used to decide which scoring period is "today".
    pub timezone: Tz,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Port(raw))?,
            None => DEFAULT_PORT,
        };
        let host = lookup("HOST")
            .and_then(|value| value.parse::<IpAddr>().ok())
            .unwrap_or(IpAddr::from([0, 0, 0, 0]));

        let snapshot_path = lookup("APP_SNAPSHOT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_PATH));

        let timezone = match lookup("APP_TIMEZONE") {
            Some(name) => name
                .trim()
                .parse::<Tz>()
                .map_err(|_| ConfigError::Timezone(name))?,
            None => DEFAULT_TIMEZONE,
        };

        Ok(Self {
            addr: SocketAddr::new(host, port),
            snapshot_path,
            timezone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config(&[]).unwrap();
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.snapshot_path, PathBuf::from(DEFAULT_SNAPSHOT_PATH));
        assert_eq!(config.timezone, chrono_tz::America::New_York);
    }

    #[test]
    fn overrides_are_read() {
        let config = config(&[
            ("PORT", "9191"),
            ("HOST", "127.0.0.1"),
            ("APP_SNAPSHOT_PATH", "/tmp/week.json"),
            ("APP_TIMEZONE", "America/Los_Angeles"),
        ])
        .unwrap();
        assert_eq!(config.addr.to_string(), "127.0.0.1:9191");
        assert_eq!(config.snapshot_path, PathBuf::from("/tmp/week.json"));
        assert_eq!(config.timezone, chrono_tz::America::Los_Angeles);
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(matches!(config(&[("PORT", "eighty")]), Err(ConfigError::Port(_))));
        assert!(matches!(
            config(&[("APP_TIMEZONE", "Mars/Olympus")]),
            Err(ConfigError::Timezone(_))
        ));
    }
}
