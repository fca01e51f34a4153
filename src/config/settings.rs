//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use super::constants::{
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SEED_SAMPLE_LISTINGS, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT,
};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub request_timeout_secs: u64,
    pub seed_sample_listings: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            seed_sample_listings: DEFAULT_SEED_SAMPLE_LISTINGS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    ///
    /// Unset or unparsable values fall back to their defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
            let raw = lookup(key)?;
            match raw.trim().parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(key, value = %raw, "Ignoring unparsable setting");
                    None
                }
            }
        }

        let defaults = Self::default();
        Self {
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parsed(&lookup, "SERVER_PORT").unwrap_or(defaults.server_port),
            request_timeout_secs: parsed(&lookup, "REQUEST_TIMEOUT_SECS")
                .unwrap_or(defaults.request_timeout_secs),
            seed_sample_listings: parsed(&lookup, "SEED_SAMPLE_LISTINGS")
                .unwrap_or(defaults.seed_sample_listings),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_values_from_lookup() {
        let config = Config::from_lookup(lookup(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "8080"),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("SEED_SAMPLE_LISTINGS", "true"),
        ]));
        assert_eq!(config.server_addr(), "127.0.0.1:8080");
        assert_eq!(config.request_timeout_secs, 5);
        assert!(config.seed_sample_listings);
    }

    #[test]
    fn test_unparsable_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("SERVER_PORT", "not-a-port"),
            ("SEED_SAMPLE_LISTINGS", "yes"),
        ]));
        assert_eq!(config.server_port, DEFAULT_SERVER_PORT);
        assert!(!config.seed_sample_listings);
    }
}
