//! Server configuration
//!
//! Settings are read from a TOML file, either given explicitly or found at
//! the per-user location `<config dir>/trivia/config.toml`. Missing keys
//! fall back to defaults, and command-line flags override file values.
//!
//! ```toml
//! host = "0.0.0.0"
//! port = 5000
//! workers = 4
//! page_size = 10
//! seed = "data/seed.toml"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::services::DEFAULT_PAGE_SIZE;

/// Directory name under the platform config directory
const CONFIG_DIR: &str = "trivia";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A setting has a value the server cannot run with
    #[error("invalid setting {key}: {reason}")]
    Invalid {
        /// Setting name
        key: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },
}

/// Settings for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Number of request-handling threads
    pub workers: usize,
    /// Items per page on list endpoints
    pub page_size: usize,
    /// Optional TOML file with categories and questions to preload
    pub seed: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            workers: 4,
            page_size: DEFAULT_PAGE_SIZE,
            seed: None,
        }
    }
}

impl ServerConfig {
    /// Default per-user config file location, if the platform has one
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Load from `explicit` if given, else from the per-user file if it exists,
    /// else use defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => {
                log::debug!("Using config file {}", path.display());
                Self::load(&path)
            },
            _ => Ok(Self::default()),
        }
    }

    /// Check that the settings are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid {
                key: "page_size",
                reason: "must be at least 1",
            });
        }
        if self.workers == 0 {
            return Err(ConfigError::Invalid {
                key: "workers",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Socket address to bind
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
