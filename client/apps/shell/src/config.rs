//! Shell Configuration
//!
//! Read from the environment after `.env` has been loaded.

use backend::BackendConfig;
use std::path::PathBuf;
use thiserror::Error;

pub const DATA_DIR_ENV: &str = "MISINFOGUARD_DATA_DIR";
pub const LOG_ENV: &str = "MISINFOGUARD_LOG";

pub const DEFAULT_DATA_DIR: &str = ".misinfoguard";
pub const DEFAULT_LOG_FILTER: &str =
    "shell=info,quota=info,analysis=info,auth=info,backend=info,pages=info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is set but empty")]
    Empty(&'static str),

    #[error("API URL must start with http:// or https://, got {0}")]
    InvalidApiUrl(String),
}

#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub backend: BackendConfig,
    /// Where local storage (guest id, session cache) is kept
    pub data_dir: PathBuf,
    /// Used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl ShellConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend = BackendConfig::from_env();
        if !backend.base_url.starts_with("http://") && !backend.base_url.starts_with("https://") {
            return Err(ConfigError::InvalidApiUrl(backend.base_url));
        }

        let data_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(dir) if dir.trim().is_empty() => return Err(ConfigError::Empty(DATA_DIR_ENV)),
            Ok(dir) => PathBuf::from(dir.trim()),
            Err(_) => PathBuf::from(DEFAULT_DATA_DIR),
        };

        Ok(Self {
            backend,
            data_dir,
            log_filter: Self::log_filter(),
        })
    }

    /// Needed before the subscriber exists, so readable on its own
    pub fn log_filter() -> String {
        std::env::var(LOG_ENV)
            .ok()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    }
}
