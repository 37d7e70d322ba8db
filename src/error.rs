//! Error types for pisim.
//!
//! All fallible operations return `Result<T, SimError>` instead of panicking.
//! Degenerate slice geometry is not an error: it yields zero-valued
//! statistics.

use thiserror::Error;

/// Result type alias for pisim operations.
pub type SimResult<T> = Result<T, SimError>;

/// Unified error type for all pisim operations.
#[derive(Debug, Error)]
pub enum SimError {
    // ===== Precondition Violations =====
    /// A caller-supplied parameter is outside its domain.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SimError {
    /// Create an invalid-parameter error.
    #[must_use]
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Whether this error was caused by a caller-supplied parameter.
    #[must_use]
    pub const fn is_precondition_violation(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = SimError::invalid_parameter("k", "batch size must be non-negative, got -3");
        assert!(err.is_precondition_violation());
        let msg = err.to_string();
        assert!(msg.contains("Invalid parameter 'k'"));
        assert!(msg.contains("-3"));
    }

    #[test]
    fn test_error_config() {
        let err = SimError::config("target must be positive");
        assert!(!err.is_precondition_violation());
        let msg = err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("target must be positive"));
    }

    #[test]
    fn test_error_serialization() {
        let err = SimError::serialization("bad record");
        assert!(err.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_error_from_io() {
        let err: SimError = std::io::Error::other("disk full").into();
        assert!(matches!(err, SimError::Io(_)));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u64>("not json").unwrap_err();
        let err: SimError = json_err.into();
        assert!(matches!(err, SimError::Serialization(_)));
    }

    #[test]
    fn test_error_from_yaml() {
        let yaml_err = serde_yaml::from_str::<u64>("[1, 2").unwrap_err();
        let err: SimError = yaml_err.into();
        assert!(err.to_string().contains("YAML parsing error"));
    }

    #[test]
    fn test_error_debug() {
        let err = SimError::config("test");
        let debug = format!("{err:?}");
        assert!(debug.contains("Config"));
    }
}
