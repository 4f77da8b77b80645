use std::time::Duration;

use crate::common::ConfigError;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_STATIC_DIR: &str = "./static";

/// Runtime settings for the site server, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub static_dir: String,
    pub published_paths_ttl: Duration,
    pub published_paths_failure_ttl: Duration,
    pub entity_probe_ttl: Duration,
    pub fetch_attempts: u32,
    pub fetch_backoff: Duration,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let secs = |name: &'static str, default: u64| -> Result<Duration, ConfigError> {
            parse_number(name, get(name), default).map(Duration::from_secs)
        };

        let fetch_attempts = parse_number("CONTENT_FETCH_ATTEMPTS", get("CONTENT_FETCH_ATTEMPTS"), 3)?;
        let fetch_backoff_ms =
            parse_number("CONTENT_FETCH_BACKOFF_MS", get("CONTENT_FETCH_BACKOFF_MS"), 200)?;

        Ok(Self {
            database_url,
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            static_dir: get("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            published_paths_ttl: secs("PUBLISHED_PATHS_TTL_SECS", 30 * 60)?,
            published_paths_failure_ttl: secs("PUBLISHED_PATHS_FAILURE_TTL_SECS", 30)?,
            entity_probe_ttl: secs("ENTITY_PROBE_TTL_SECS", 5 * 60)?,
            fetch_attempts: fetch_attempts.clamp(1, 3) as u32,
            fetch_backoff: Duration::from_millis(fetch_backoff_ms),
        })
    }
}

fn parse_number(name: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .parse::<u64>()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
