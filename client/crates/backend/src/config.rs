//! Backend Configuration

use std::time::Duration;

/// Environment variable holding the API base URL
pub const API_URL_ENV: &str = "MISINFOGUARD_API_URL";
/// Environment variable holding the request timeout in seconds
pub const API_TIMEOUT_ENV: &str = "MISINFOGUARD_API_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL, e.g. `http://localhost:8000/api`
    pub base_url: String,
    /// Per-request timeout. `None` waits for the backend indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            timeout: None,
        }
    }
}

impl BackendConfig {
    /// Read overrides from the environment, keeping defaults for anything unset
    ///
    /// An unparsable timeout is ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = url.trim().to_string();
            }
        }
        if let Ok(raw) = std::env::var(API_TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Some(Duration::from_secs(secs)),
                _ => tracing::warn!(value = %raw, "Ignoring invalid {API_TIMEOUT_ENV}"),
            }
        }
        config
    }
}
