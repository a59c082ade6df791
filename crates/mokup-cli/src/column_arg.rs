//! Inline column definitions given on the command line as `Header=v1,v2,...`.

use std::str::FromStr;

use thiserror::Error;

/// Separator between the header and its values.
pub const HEADER_SEPARATOR: char = '=';

/// Separator between candidate values.
pub const VALUE_SEPARATOR: char = ',';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnArgError {
    #[error("expected HEADER=VALUES, got {0:?}")]
    MissingSeparator(String),

    #[error("column header is empty in {0:?}")]
    EmptyHeader(String),
}

/// One `--column` argument.
///
/// Values are split on `,` and kept as written; trimming and dropping blanks
/// happen when the column reaches the editing slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnArg {
    pub header: String,
    pub values: Vec<String>,
}

impl FromStr for ColumnArg {
    type Err = ColumnArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (header, values) = s
            .split_once(HEADER_SEPARATOR)
            .ok_or_else(|| ColumnArgError::MissingSeparator(s.to_string()))?;
        if header.trim().is_empty() {
            return Err(ColumnArgError::EmptyHeader(s.to_string()));
        }
        Ok(Self {
            header: header.to_string(),
            values: values.split(VALUE_SEPARATOR).map(str::to_string).collect(),
        })
    }
}
