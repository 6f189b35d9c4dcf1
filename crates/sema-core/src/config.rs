//! Application configuration

use serde::{Deserialize, Serialize};
use url::Url;

/// Address of the local extraction backend.
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8000";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the document-intelligence service
    pub service_url: Url,
    /// Per-request timeout in seconds; a hung call fails instead of
    /// leaving its operation stuck in flight
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn new(service_url: Url) -> Self {
        Self {
            service_url,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Build configuration from the environment, falling back to the
    /// defaults for anything unset or unparsable:
    /// - `SEMA_SERVICE_URL`
    /// - `SEMA_REQUEST_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("SEMA_SERVICE_URL") {
            match Url::parse(&raw) {
                Ok(url) => config.service_url = url,
                Err(e) => {
                    tracing::warn!(url = %raw, error = %e, "Ignoring invalid SEMA_SERVICE_URL");
                }
            }
        }

        if let Ok(raw) = std::env::var("SEMA_REQUEST_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => config.request_timeout_secs = secs,
                _ => {
                    tracing::warn!(value = %raw, "Ignoring invalid SEMA_REQUEST_TIMEOUT_SECS");
                }
            }
        }

        config
    }
}

impl Default for Config {
    fn default() -> Self {
        // The default URL is a compile-time constant and always parses
        let service_url = Url::parse(DEFAULT_SERVICE_URL).expect("default service URL is valid");
        Self::new(service_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.service_url.as_str(), "http://127.0.0.1:8000/");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = Config::new(Url::parse("https://docs.example.com/api").unwrap());
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.service_url, config.service_url);
        assert_eq!(parsed.request_timeout_secs, config.request_timeout_secs);
    }
}
