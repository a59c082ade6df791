use std::path::PathBuf;

use mokup_common::AtomicWriteError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynthError {
    #[error("at least one column must be configured")]
    EmptyConfiguration,

    #[error("number of rows must be a positive integer, got {input:?}")]
    InvalidRowCount { input: String },

    #[error("column {header:?} has no values to sample from")]
    EmptyColumn { header: String },

    #[error("failed to encode CSV")]
    Csv(#[from] csv::Error),

    #[error("failed to write CSV to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: AtomicWriteError,
    },
}

impl SynthError {
    /// Whether the caller passed something unusable, as opposed to an I/O or encoding failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::EmptyConfiguration | Self::InvalidRowCount { .. } | Self::EmptyColumn { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SynthError>;
