//! Desktop shell configuration.
//!
//! Reads `config.yaml` from the app data directory. Every field is optional;
//! a missing file yields the defaults. `KOGNITERM_SERVER_URL` overrides the
//! configured server URL.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable that overrides [`DesktopConfig::server_url`].
pub const SERVER_URL_ENV: &str = "KOGNITERM_SERVER_URL";

const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Errors from reading or parsing the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("failed to parse config: {reason}")]
    Parse { reason: String },
}

/// Runtime settings for the desktop shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Base URL of the KogniTerm server.
    pub server_url: String,
    /// TCP connect timeout for server requests.
    pub connect_timeout_secs: u64,
    /// Total timeout for a chat request. Model replies can be slow.
    pub request_timeout_secs: u64,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            connect_timeout_secs: 5,
            request_timeout_secs: 60,
        }
    }
}

impl DesktopConfig {
    /// Parse a config file. Fields absent from the file keep their defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        // An empty file deserializes to unit, not a mapping.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&raw).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })
    }

    /// Load `config.yaml` from the data directory, falling back to defaults,
    /// then apply environment overrides.
    pub fn load_or_default() -> Self {
        let path = Self::config_path();
        let cfg = if path.exists() {
            match Self::load_from(&path) {
                Ok(cfg) => {
                    tracing::info!(path = %path.display(), "loaded desktop config");
                    cfg
                }
                Err(e) => {
                    tracing::warn!(error = %e, "invalid desktop config, using defaults");
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        cfg.with_server_url_override(std::env::var(SERVER_URL_ENV).ok())
    }

    /// Replace `server_url` when an override is present and non-blank.
    pub fn with_server_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            tracing::info!(server_url = %url, "server URL overridden from {SERVER_URL_ENV}");
            self.server_url = url.trim().to_string();
        }
        self
    }

    fn config_path() -> PathBuf {
        crate::data_dir().join("config.yaml")
    }
}
