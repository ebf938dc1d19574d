use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, ConfigOverrides};

/// Largest page size GitHub accepts.
const MAX_PER_PAGE: u32 = 100;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/repolist/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("repolist").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Applies command-line overrides and validates the result.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(owner) = &overrides.owner {
            self.service.owner = Some(owner.clone());
        }
        if let Some(base_url) = &overrides.base_url {
            self.service.base_url = base_url.clone();
        }

        self.validate()?;
        Ok(self)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The base URL is http(s)
    /// - The owner, if set, is a plain account name
    /// - Page size and timeouts are in range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let service = &self.service;

        if !(service.base_url.starts_with("http://") || service.base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "base_url '{}' must start with http:// or https://",
                    service.base_url
                ),
            });
        }

        if let Some(owner) = &service.owner {
            let valid = !owner.is_empty()
                && owner.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
            if !valid {
                return Err(ConfigError::ValidationError {
                    message: format!("owner '{}' is not a valid account name", owner),
                });
            }
        }

        if service.per_page == 0 || service.per_page > MAX_PER_PAGE {
            return Err(ConfigError::ValidationError {
                message: format!("per_page must be between 1 and {}", MAX_PER_PAGE),
            });
        }

        if service.timeout_seconds == 0 || service.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "timeouts must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
