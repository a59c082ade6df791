//! Atomic file replacement.
//!
//! Content is written to a sibling temp file, synced, then renamed over the
//! target. A reader sees either the previous file or the complete new one.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtomicWriteError {
    #[error("failed to {operation} {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to move {temp_path} into place at {target_path}")]
    Rename {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AtomicWriteError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } => path,
            Self::Rename { target_path, .. } => target_path,
        }
    }
}

/// Sibling temp path used while replacing `path` (`name.ext` → `name.ext.tmp`).
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replace `path` with `bytes`.
///
/// Creates missing parent directories. On failure the temp file is removed
/// and any existing file at `path` is left as it was.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), AtomicWriteError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| AtomicWriteError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let temp_path = temp_path_for(path);
    let result = write_temp(&temp_path, bytes).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| AtomicWriteError::Rename {
            temp_path: temp_path.clone(),
            target_path: path.to_path_buf(),
            source: e,
        })
    });

    if result.is_err() && temp_path.exists() {
        if let Err(e) = fs::remove_file(&temp_path) {
            tracing::warn!(path = %temp_path.display(), error = %e, "failed to remove temp file");
        }
    }
    result
}

fn write_temp(temp_path: &Path, bytes: &[u8]) -> Result<(), AtomicWriteError> {
    let io_error = |operation| {
        let path = temp_path.to_path_buf();
        move |source| AtomicWriteError::Io {
            operation,
            path,
            source,
        }
    };

    let mut file = File::create(temp_path).map_err(io_error("create"))?;
    file.write_all(bytes).map_err(io_error("write"))?;
    file.sync_all().map_err(io_error("sync"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_and_replaces() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("record.json");

        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"second");
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.csv");

        write_atomic(&path, b"a,b\n").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn temp_path_is_a_sibling() {
        let path = Path::new("/data/column_config.json");
        assert_eq!(
            temp_path_for(path),
            PathBuf::from("/data/column_config.json.tmp")
        );
    }

    #[test]
    fn failed_rename_cleans_up_and_keeps_target() {
        let dir = tempdir().unwrap();
        // A non-empty directory at the target path cannot be replaced by a file.
        let path = dir.path().join("occupied");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep.txt"), b"keep").unwrap();

        let err = write_atomic(&path, b"data").unwrap_err();

        assert!(matches!(err, AtomicWriteError::Rename { .. }));
        assert_eq!(err.path(), path.as_path());
        assert!(!temp_path_for(&path).exists());
        assert_eq!(fs::read(path.join("keep.txt")).unwrap(), b"keep");
    }
}
