//! Service configuration
//!
//! A single JSON config file drives the process: catalog file path,
//! HTTP bind settings, and pagination defaults. Missing optional fields
//! fall back to serde defaults; validation runs once at load time and
//! any violation is fatal.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http_server::HttpConfig;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors; all are fatal at boot.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config file {path} is not valid JSON: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Path to the catalog JSON file (required)
    pub data_file: String,

    /// HTTP bind and CORS settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Page size when a request omits `limit`
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Ceiling applied to requested page sizes
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

fn default_page_size() -> usize {
    9
}

fn default_max_page_size() -> usize {
    100
}

impl ServiceConfig {
    /// Loads and validates configuration from a JSON file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: ServiceConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.display().to_string(),
                source: e,
            })?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.data_file.trim().is_empty() {
            return Err(ConfigError::Invalid("data_file must not be empty".into()));
        }
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be > 0".into()));
        }
        if self.max_page_size < self.page_size {
            return Err(ConfigError::Invalid(
                "max_page_size must be >= page_size".into(),
            ));
        }
        Ok(())
    }
}
