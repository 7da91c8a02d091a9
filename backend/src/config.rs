//! Runtime configuration read from the environment (and an optional `.env` file).
//!
//! | Variable | Default |
//! |---|---|
//! | `PROCUROID_HOST` | `127.0.0.1` |
//! | `PROCUROID_PORT` | `8080` |
//! | `PROCUROID_DB` | `procuroid.sqlite` |
//! | `PROCUROID_SESSION_TTL_SECS` | `3600` |
//! | `PROCUROID_OPEN_BROWSER` | `true` |

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has an invalid value `{value}`")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub session_ttl_secs: i64,
    pub open_browser: bool,
}

impl Config {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: lookup("PROCUROID_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_var(&lookup, "PROCUROID_PORT", 8080)?,
            database_path: lookup("PROCUROID_DB")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("procuroid.sqlite")),
            session_ttl_secs: parse_var(&lookup, "PROCUROID_SESSION_TTL_SECS", 3600)?,
            open_browser: parse_var(&lookup, "PROCUROID_OPEN_BROWSER", true)?,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_path, PathBuf::from("procuroid.sqlite"));
        assert_eq!(config.session_ttl_secs, 3600);
        assert!(config.open_browser);
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn values_are_read_from_the_environment() {
        let config = config_from(&[
            ("PROCUROID_HOST", "0.0.0.0"),
            ("PROCUROID_PORT", "5000"),
            ("PROCUROID_DB", "/tmp/orders.sqlite"),
            ("PROCUROID_SESSION_TTL_SECS", "60"),
            ("PROCUROID_OPEN_BROWSER", "false"),
        ])
        .unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.session_ttl_secs, 60);
        assert!(!config.open_browser);
    }

    #[test]
    fn bad_numbers_are_rejected() {
        assert_eq!(
            config_from(&[("PROCUROID_PORT", "eighty")]),
            Err(ConfigError::InvalidValue {
                name: "PROCUROID_PORT",
                value: "eighty".to_string()
            })
        );
    }
}
