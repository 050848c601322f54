//! Runtime execution mode: unbounded (streaming) or bounded (batch).

use crate::error::ConfigError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Runtime execution mode.
///
/// Read case-insensitively, always written in canonical upper case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuntimeMode {
    /// Continuous processing of unbounded input (default)
    #[default]
    Streaming,
    /// Finite processing of bounded input
    Batch,
    /// Let the engine pick from the boundedness of the sources
    Automatic,
}

impl RuntimeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuntimeMode::Streaming => "STREAMING",
            RuntimeMode::Batch => "BATCH",
            RuntimeMode::Automatic => "AUTOMATIC",
        }
    }

    pub fn is_streaming(&self) -> bool {
        matches!(self, RuntimeMode::Streaming)
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RuntimeMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "STREAMING" => Ok(RuntimeMode::Streaming),
            "BATCH" => Ok(RuntimeMode::Batch),
            "AUTOMATIC" => Ok(RuntimeMode::Automatic),
            _ => Err(ConfigError::invalid_argument(format!(
                "Invalid runtime mode: '{}'. Expected: STREAMING, BATCH, or AUTOMATIC",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("batch".parse::<RuntimeMode>().unwrap(), RuntimeMode::Batch);
        assert_eq!("Streaming".parse::<RuntimeMode>().unwrap(), RuntimeMode::Streaming);
        assert_eq!(" AUTOMATIC ".parse::<RuntimeMode>().unwrap(), RuntimeMode::Automatic);
    }

    #[test]
    fn writes_canonical_upper_case() {
        assert_eq!(RuntimeMode::Batch.to_string(), "BATCH");
        assert_eq!(RuntimeMode::Streaming.as_str(), "STREAMING");
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = "stream".parse::<RuntimeMode>().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidArgument(_)));
    }

    #[test]
    fn default_is_streaming() {
        assert!(RuntimeMode::default().is_streaming());
        assert!(!RuntimeMode::Batch.is_streaming());
        assert!(!RuntimeMode::Automatic.is_streaming());
    }
}
