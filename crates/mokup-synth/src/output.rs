//! Writing synthesized documents to disk.

use std::path::Path;

use mokup_common::write_atomic;

use crate::document::CsvDocument;
use crate::error::{Result, SynthError};

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "mokup-00.csv";

/// Write `document` to `path`, replacing any previous file atomically.
pub fn write_document(document: &CsvDocument, path: &Path) -> Result<()> {
    let bytes = document.to_bytes()?;
    write_atomic(path, &bytes).map_err(|source| SynthError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        rows = document.row_count(),
        columns = document.headers().len(),
        "wrote CSV"
    );
    Ok(())
}
