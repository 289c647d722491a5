//! Client configuration loaded via OrthoConfig.
//!
//! Values come from `MEOW_*` environment variables or a configuration file;
//! every field has a default so an empty environment is valid.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Mock backend used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://m1.apifoxmock.com/m1/7761538-7507393-default";
/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;
const DEFAULT_STORAGE_DIR: &str = ".meow-client";

/// Failure to turn configuration into usable settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Sources could not be merged or parsed.
    #[error("failed to load configuration: {message}")]
    Load {
        /// Loader description.
        message: String,
    },
    /// `base_url` is not an absolute URL.
    #[error("invalid base URL {value:?}: {source}")]
    BaseUrl {
        /// Configured value.
        value: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },
    /// `timeout_ms` is zero.
    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
}

/// Settings for the API transport and local state storage.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MEOW")]
pub struct ClientSettings {
    /// Backend base URL; paths such as `/cats` are appended to it.
    pub base_url: Option<String>,
    /// Request timeout in milliseconds.
    pub timeout_ms: Option<u64>,
    /// Directory holding persisted session and campus state.
    pub storage_dir: Option<PathBuf>,
}

impl ClientSettings {
    /// Load settings from the environment and configuration files only.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when a source cannot be parsed.
    pub fn load_without_cli() -> Result<Self, ConfigError> {
        Self::load_from_iter([OsString::from(env!("CARGO_PKG_NAME"))]).map_err(|error| {
            ConfigError::Load {
                message: error.to_string(),
            }
        })
    }

    /// Configured base URL, validated.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BaseUrl`] when the value does not parse.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let raw = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        Url::parse(raw).map_err(|source| ConfigError::BaseUrl {
            value: raw.to_owned(),
            source,
        })
    }

    /// Configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroTimeout`] for a zero timeout.
    pub fn timeout(&self) -> Result<Duration, ConfigError> {
        match self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS) {
            0 => Err(ConfigError::ZeroTimeout),
            millis => Ok(Duration::from_millis(millis)),
        }
    }

    /// Configured storage directory.
    #[must_use]
    pub fn storage_dir(&self) -> PathBuf {
        self.storage_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR))
    }
}
