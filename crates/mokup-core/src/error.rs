//! Session error types.

use mokup_persistence::PersistenceError;
use mokup_synth::SynthError;
use thiserror::Error;

use crate::preset::PresetError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("at least one column must be configured")]
    EmptyConfiguration,

    #[error("column {index} is outside the editing layout ({columns} columns)")]
    ColumnOutOfRange { index: usize, columns: usize },

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Synth(SynthError),

    #[error(transparent)]
    Preset(#[from] PresetError),
}

impl From<SynthError> for SessionError {
    fn from(error: SynthError) -> Self {
        match error {
            SynthError::EmptyConfiguration => Self::EmptyConfiguration,
            other => Self::Synth(other),
        }
    }
}

impl SessionError {
    /// Message suitable for showing to the user as-is.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyConfiguration => "At least one column must be configured".to_string(),
            Self::Persistence(error) => error.user_message(),
            Self::Synth(SynthError::InvalidRowCount { .. }) => {
                "Number of rows must be a positive whole number".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::EmptyConfiguration => {
                Some("Give at least one column a header and one or more values.".into())
            }
            Self::Persistence(error) => error.suggestion(),
            Self::Preset(PresetError::NotFound { .. }) => {
                Some("Check the preset path or create the file.".into())
            }
            _ => None,
        }
    }
}

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synth_empty_configuration_maps_to_session_variant() {
        let error = SessionError::from(SynthError::EmptyConfiguration);
        assert!(matches!(error, SessionError::EmptyConfiguration));
    }

    #[test]
    fn row_count_message_is_user_facing() {
        let error = SessionError::from(SynthError::InvalidRowCount {
            input: "-5".to_string(),
        });
        insta::assert_snapshot!(error.user_message(), @"Number of rows must be a positive whole number");
    }
}
