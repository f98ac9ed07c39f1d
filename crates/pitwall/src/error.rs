//! Error types for pitwall.
//!
//! This module defines all error types used throughout the pitwall crate.
//! Query failures and bad selector values are recovered at the request
//! boundary and shown to the user as messages, never as a crash.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for pitwall operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Database Errors ===
    /// Failed to open the race database.
    #[error("failed to open database at {path}: {source}")]
    DatabaseOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A database query failed.
    #[error("database query failed: {0}")]
    Query(#[from] rusqlite::Error),

    // === Selection Errors ===
    /// A selector value was not in the recognized set.
    ///
    /// Raised before any query is constructed, so an unrecognized value
    /// never reaches the database.
    #[error("invalid selection '{value}': expected one of {expected}")]
    InvalidSelection {
        /// The value the user selected.
        value: String,
        /// Human-readable list of accepted values.
        expected: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for pitwall operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an invalid-selection error.
    #[must_use]
    pub fn invalid_selection(value: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidSelection {
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Check if this error is an invalid selector value.
    #[must_use]
    pub fn is_invalid_selection(&self) -> bool {
        matches!(self, Self::InvalidSelection { .. })
    }

    /// Check if this error is a query failure.
    #[must_use]
    pub fn is_query_failure(&self) -> bool {
        matches!(self, Self::Query(_) | Self::DatabaseOpen { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_selection_display() {
        let err = Error::invalid_selection("Unknown", "engine, tyre, team");
        let msg = err.to_string();
        assert!(msg.contains("Unknown"));
        assert!(msg.contains("engine, tyre, team"));
    }

    #[test]
    fn test_is_invalid_selection() {
        assert!(Error::invalid_selection("x", "y").is_invalid_selection());
        assert!(!Error::ConfigValidation {
            message: "bad".to_string(),
        }
        .is_invalid_selection());
    }

    #[test]
    fn test_is_query_failure() {
        let result = rusqlite::Connection::open_with_flags(
            "/nonexistent/path/f1db.db",
            rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY,
        );
        if let Err(sqlite_err) = result {
            let err = Error::DatabaseOpen {
                path: PathBuf::from("/nonexistent/path/f1db.db"),
                source: sqlite_err,
            };
            assert!(err.is_query_failure());
            assert!(!err.is_invalid_selection());
        }
    }

    #[test]
    fn test_from_rusqlite_error() {
        let result = rusqlite::Connection::open_with_flags(
            "/nonexistent/path/f1db.db",
            rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY,
        );
        if let Err(sqlite_err) = result {
            let err: Error = sqlite_err.into();
            assert!(matches!(err, Error::Query(_)));
        }
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }

    #[test]
    fn test_config_validation_display() {
        let err = Error::ConfigValidation {
            message: "points_threshold must be finite".to_string(),
        };
        assert!(err.to_string().contains("points_threshold"));
    }
}
