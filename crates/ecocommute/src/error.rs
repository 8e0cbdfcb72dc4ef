//! Error types for ecocommute.
//!
//! This module defines all error types used throughout the ecocommute crate.
//! The emission engine itself only fails on bad leg input or an unrecognised
//! transport mode; the remaining variants belong to the configuration and
//! export plumbing around it.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for ecocommute operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Input Errors ===
    /// A leg parameter was rejected before a trip leg could be created.
    #[error("invalid input for {field}: {message}")]
    InvalidInput {
        /// Name of the offending field.
        field: &'static str,
        /// Description of what was wrong with the value.
        message: String,
    },

    /// The transport mode identifier is not in the emission factor table.
    #[error("unknown transport mode: '{0}'")]
    UnknownMode(String),

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

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to write an export file.
    #[error("failed to write export to {path}: {source}")]
    ExportWrite {
        /// Destination of the export.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// CSV reading or writing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for ecocommute operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new invalid input error for the given field.
    #[must_use]
    pub fn invalid_input(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            message: message.into(),
        }
    }

    /// Create a new unknown mode error.
    #[must_use]
    pub fn unknown_mode(mode: impl Into<String>) -> Self {
        Self::UnknownMode(mode.into())
    }

    /// Check if this error is an input validation failure.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Check if this error is an unknown transport mode.
    #[must_use]
    pub fn is_unknown_mode(&self) -> bool {
        matches!(self, Self::UnknownMode(_))
    }
}
