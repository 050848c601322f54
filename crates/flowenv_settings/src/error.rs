//! Error type for settings and configuration operations.

use std::path::PathBuf;

/// Error type for settings and configuration operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid value '{value}' for key '{key}': {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),
}

impl ConfigError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        ConfigError::InvalidArgument(message.into())
    }

    pub(crate) fn invalid_value(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for settings and configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
