use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

use crate::search::DEFAULT_PAGE_SIZE;

pub const DEFAULT_API_URL: &str = "https://forkify-api.herokuapp.com/api";
pub const DEFAULT_DB_PATH: &str = "forkify.db";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub db_path: String,
    pub page_size: usize,
    pub timeout_secs: u64,
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_url: try_load(&lookup, "FORKIFY_API_URL", DEFAULT_API_URL.to_string()),
            db_path: try_load(&lookup, "FORKIFY_DB_PATH", DEFAULT_DB_PATH.to_string()),
            page_size: try_load(&lookup, "FORKIFY_PAGE_SIZE", DEFAULT_PAGE_SIZE).max(1),
            timeout_secs: try_load(&lookup, "FORKIFY_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };

    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value: {e}, using default: {default}");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.db_path, DEFAULT_DB_PATH);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_overrides_and_invalid_values() {
        let config = Config::from_lookup(|key| match key {
            "FORKIFY_API_URL" => Some("http://localhost:8080/api".to_string()),
            "FORKIFY_PAGE_SIZE" => Some("not a number".to_string()),
            "FORKIFY_TIMEOUT_SECS" => Some(" 5 ".to_string()),
            _ => None,
        });

        assert_eq!(config.api_url, "http://localhost:8080/api");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let config = Config::from_lookup(|key| (key == "FORKIFY_PAGE_SIZE").then(|| "0".to_string()));
        assert_eq!(config.page_size, 1);
    }
}
