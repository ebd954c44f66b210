//! Error types for the decision engine.
//!
//! Errors exist only at configuration time: an engine is never constructed
//! on an invalid policy configuration, and per-request evaluation is total.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the decision engine.
#[derive(Error, Debug)]
pub enum Error {
    /// A required policy table was empty at construction time.
    #[error("Configuration error: required table `{table}` is empty")]
    EmptyTable {
        /// Name of the offending table
        table: String,
    },

    /// The working-hours window was inverted (start past end).
    #[error("Configuration error: invalid working-hours range {start}..{end}")]
    InvalidHourRange {
        /// Start of the half-open window
        start: u32,
        /// End of the half-open window
        end: u32,
    },

    /// I/O error while reading a policy document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Create an empty-table configuration error.
    pub fn empty_table(table: impl Into<String>) -> Self {
        Error::EmptyTable {
            table: table.into(),
        }
    }

    /// Create an invalid hour-range configuration error.
    pub fn invalid_hour_range(start: u32, end: u32) -> Self {
        Error::InvalidHourRange { start, end }
    }

    /// Check if this error is a configuration validation failure (as
    /// opposed to a document loading failure).
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::EmptyTable { .. } | Error::InvalidHourRange { .. }
        )
    }

    /// Get the error category for metrics.
    pub fn category(&self) -> &'static str {
        match self {
            Error::EmptyTable { .. } => "empty_table",
            Error::InvalidHourRange { .. } => "invalid_range",
            Error::Io(_) => "io",
            Error::Serialization(_) => "serialization",
            Error::Yaml(_) => "yaml",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::empty_table("trusted_networks");
        assert!(matches!(err, Error::EmptyTable { .. }));
        assert_eq!(err.category(), "empty_table");
    }

    #[test]
    fn test_error_is_config() {
        assert!(Error::empty_table("clearance_levels").is_config());
        assert!(Error::invalid_hour_range(18, 9).is_config());

        let io = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(!io.is_config());
    }

    #[test]
    fn test_error_display() {
        let err = Error::empty_table("sensitivity_requirements");
        assert!(err.to_string().contains("sensitivity_requirements"));

        let err = Error::invalid_hour_range(20, 8);
        assert!(err.to_string().contains("20..8"));
    }
}
