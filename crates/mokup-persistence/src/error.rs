//! Persistence error types.
//!
//! All store operations return structured errors that provide
//! user-friendly messages and optional remediation hints.

use std::path::PathBuf;

use mokup_common::AtomicWriteError;
use thiserror::Error;

/// Persistence operation error.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Failed to serialize configuration")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// The record exists but is not a header → values mapping.
    #[error("Failed to deserialize configuration from {location}")]
    Deserialization {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    /// Atomic write failed (temp file couldn't be written or renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        target_path: PathBuf,
        #[source]
        source: AtomicWriteError,
    },
}

impl PersistenceError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::Serialization { .. } => {
                "An error occurred while preparing the configuration for saving.".to_string()
            }
            Self::Deserialization { location, source } => {
                format!(
                    "The saved configuration at {location} is not readable \
                    (line {}, column {}). The file may be corrupted.",
                    source.line(),
                    source.column()
                )
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the configuration to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that you have permission to read the configuration file.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::Serialization { .. } => None,
            Self::Deserialization { .. } => Some(
                "Fix or delete the configuration file, or save a new configuration over it."
                    .into(),
            ),
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or choose a different configuration path.".into())
            }
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
