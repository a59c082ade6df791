//! Settings loaded from `mokup.toml`.
//!
//! Every field has a default, so a missing file or a partial file is fine:
//!
//! ```toml
//! preset = "data_config.toml"
//!
//! [store]
//! path = "column_config.json"
//!
//! [output]
//! path = "mokup-00.csv"
//! rows = 500
//!
//! [layout]
//! columns = 8
//! values_per_column = 12
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use mokup_model::SlotLayout;
use mokup_persistence::DEFAULT_CONFIG_FILE;
use mokup_synth::{DEFAULT_OUTPUT_FILE, RowCount};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings file looked up in the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "mokup.toml";

/// Preset applied to the editing state at start-up, when present.
pub const DEFAULT_PRESET_FILE: &str = "data_config.toml";

/// Rows generated when nothing else is asked for.
pub const DEFAULT_ROW_COUNT: i64 = 500;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid settings {}: {reason}", path.display())]
    Invalid { path: PathBuf, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Column preset applied at start-up; ignored when the file does not exist.
    pub preset: PathBuf,
    pub store: StoreSettings,
    pub output: OutputSettings,
    pub layout: SlotLayout,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preset: PathBuf::from(DEFAULT_PRESET_FILE),
            store: StoreSettings::default(),
            output: OutputSettings::default(),
            layout: SlotLayout::default(),
        }
    }
}

/// Where the configuration record is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    pub path: PathBuf,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }
}

/// Where and how much to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub path: PathBuf,
    pub rows: i64,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            rows: DEFAULT_ROW_COUNT,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };
        let settings = Self::parse(&text, path)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    fn parse(text: &str, path: &Path) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate(path)?;
        Ok(settings)
    }

    fn validate(&self, path: &Path) -> Result<(), SettingsError> {
        let invalid = |reason: String| SettingsError::Invalid {
            path: path.to_path_buf(),
            reason,
        };
        self.layout.validate().map_err(|e| invalid(e.to_string()))?;
        RowCount::try_from(self.output.rows)
            .map_err(|_| invalid(format!("output.rows must be positive, got {}", self.output.rows)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join(DEFAULT_SETTINGS_FILE)).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.output.rows, 500);
        assert_eq!(settings.layout, SlotLayout::new(8, 12).unwrap());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let text = "[output]\nrows = 25\n\n[layout]\ncolumns = 3\n";
        let settings = Settings::parse(text, Path::new("mokup.toml")).unwrap();

        assert_eq!(settings.output.rows, 25);
        assert_eq!(settings.output.path, PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert_eq!(settings.layout.columns, 3);
        assert_eq!(settings.layout.values_per_column, 12);
        assert_eq!(settings.store.path, PathBuf::from(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn non_positive_rows_are_invalid() {
        let err = Settings::parse("[output]\nrows = 0\n", Path::new("mokup.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { .. }));
    }

    #[test]
    fn zero_width_layout_is_invalid() {
        let err = Settings::parse("[layout]\nvalues_per_column = 0\n", Path::new("mokup.toml"))
            .unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { .. }));
    }

    #[test]
    fn unknown_syntax_is_parse_error() {
        let err = Settings::parse("[output\n", Path::new("mokup.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn settings_round_trip_through_toml() {
        let settings = Settings::default();
        let text = toml::to_string_pretty(&settings).unwrap();
        let parsed = Settings::parse(&text, Path::new("mokup.toml")).unwrap();
        assert_eq!(parsed, settings);
    }
}
