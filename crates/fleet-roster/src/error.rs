//! Error types for the roster crate
//!
//! The store operations themselves are infallible. Errors only arise at the
//! boundaries where untyped input enters:
//! - status text coming from a form or config
//! - form submissions with missing or malformed fields
//! - configuration files

use std::path::PathBuf;

/// Unrecognized train status text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown train status: {0:?} (expected on-time, delayed, departed or cancelled)")]
pub struct StatusParseError(pub String);

/// Form submission errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// A required field was absent or blank
    #[error("missing required field: {field}")]
    MissingField {
        /// Form field name
        field: &'static str,
    },

    /// A numeric field could not be parsed
    #[error("invalid number for {field}: {value:?}")]
    InvalidNumber {
        /// Form field name
        field: &'static str,
        /// Raw submitted text
        value: String,
    },

    /// Status field held an unknown value
    #[error(transparent)]
    Status(#[from] StatusParseError),
}

impl FormError {
    /// Name of the form field this error refers to
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field } | Self::InvalidNumber { field, .. } => field,
            Self::Status(_) => "status",
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for [`crate::RosterConfig`]
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Occupancy thresholds out of order or out of range
    #[error("invalid occupancy thresholds: medium {medium}, high {high} (need 0 < medium <= high)")]
    InvalidThresholds {
        /// Medium threshold as configured
        medium: f64,
        /// High threshold as configured
        high: f64,
    },

    /// Default capacity must be positive
    #[error("default capacity must be greater than zero")]
    ZeroDefaultCapacity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_error_reports_field() {
        let err = FormError::MissingField { field: "platform" };
        assert_eq!(err.field(), "platform");
        assert_eq!(err.to_string(), "missing required field: platform");

        let err = FormError::from(StatusParseError("late".into()));
        assert_eq!(err.field(), "status");
        assert!(err.to_string().contains("\"late\""));
    }
}
