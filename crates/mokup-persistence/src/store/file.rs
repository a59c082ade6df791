//! JSON file backend.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use mokup_common::write_atomic;
use mokup_model::Configuration;

use super::ConfigurationStore;
use crate::error::{PersistenceError, Result};
use crate::format::{decode_configuration, encode_configuration};

/// Default record file name, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "column_config.json";

/// Stores the configuration as a JSON file.
///
/// Saves go through a temp file and a rename, so an interrupted save never
/// leaves a truncated record behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_FILE)
    }
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigurationStore for JsonFileStore {
    fn save(&mut self, config: &Configuration) -> Result<()> {
        let bytes = encode_configuration(config)?;
        write_atomic(&self.path, &bytes).map_err(|source| {
            PersistenceError::AtomicWriteFailed {
                target_path: self.path.clone(),
                source,
            }
        })?;

        tracing::info!(
            path = %self.path.display(),
            columns = config.len(),
            "saved configuration"
        );
        Ok(())
    }

    fn load(&self) -> Result<Configuration> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    path = %self.path.display(),
                    "no saved configuration, starting empty"
                );
                return Ok(Configuration::new());
            }
            Err(e) => {
                return Err(PersistenceError::Io {
                    operation: "read",
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        let config = decode_configuration(&bytes, &self.location())?;
        tracing::info!(
            path = %self.path.display(),
            columns = config.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn config(pairs: &[(&str, &[&str])]) -> Configuration {
        pairs
            .iter()
            .map(|(header, values)| {
                (
                    *header,
                    values.iter().map(|v| (*v).to_string()).collect::<Vec<_>>(),
                )
            })
            .collect()
    }

    #[test]
    fn load_without_record_is_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("column_config.json"));

        let loaded = store.load().unwrap();

        assert!(loaded.is_empty());
    }

    #[test]
    fn save_load_round_trip() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("column_config.json"));
        let saved = config(&[("Color", &["Red", "Blue"]), ("Size", &["S", "M", "L"])]);

        store.save(&saved).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, saved);
    }

    #[test]
    fn save_overwrites_without_merging() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("column_config.json"));

        store.save(&config(&[("A", &["1"]), ("B", &["2"])])).unwrap();
        store.save(&config(&[("C", &["3"])])).unwrap();

        assert_eq!(store.load().unwrap(), config(&[("C", &["3"])]));
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("column_config.json");
        let mut store = JsonFileStore::new(&path);

        store.save(&config(&[("X", &["1"])])).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("column_config.json")]);
    }

    #[test]
    fn unreadable_path_is_io_error() {
        let dir = tempdir().unwrap();
        // A directory cannot be read as a record.
        let store = JsonFileStore::new(dir.path());

        assert!(matches!(store.load(), Err(PersistenceError::Io { .. })));
    }

    #[test]
    fn default_store_uses_default_file() {
        assert_eq!(JsonFileStore::default().path(), Path::new(DEFAULT_CONFIG_FILE));
    }
}
