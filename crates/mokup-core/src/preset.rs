//! Column presets stored as TOML.
//!
//! A preset lists columns in order:
//!
//! ```toml
//! [[columns]]
//! header = "Color"
//! values = ["Red", "Blue"]
//!
//! [[columns]]
//! header = "Size"
//! values = ["S", "M", "L"]
//! ```
//!
//! Entries are normalized like editing-state columns: trimmed, blank values
//! dropped, and columns without a header or values skipped.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use mokup_model::{ColumnConfig, Configuration};
use serde::Deserialize;
use thiserror::Error;

use crate::session::assemble;

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("preset not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read preset {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid preset {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PresetFile {
    columns: Vec<PresetColumn>,
}

#[derive(Debug, Deserialize)]
struct PresetColumn {
    header: String,
    #[serde(default)]
    values: Vec<String>,
}

/// Read a preset file into a configuration.
pub fn load_preset(path: &Path) -> Result<Configuration, PresetError> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => PresetError::NotFound {
            path: path.to_path_buf(),
        },
        _ => PresetError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    let config = parse_preset(&text, path)?;
    tracing::info!(path = %path.display(), columns = config.len(), "loaded preset");
    Ok(config)
}

fn parse_preset(text: &str, path: &Path) -> Result<Configuration, PresetError> {
    let file: PresetFile = toml::from_str(text).map_err(|source| PresetError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let columns = file
        .columns
        .into_iter()
        .map(|column| ColumnConfig::new(column.header, column.values));
    Ok(assemble(columns))
}
