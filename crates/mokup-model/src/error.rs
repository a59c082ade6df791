use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error(
        "invalid slot layout: {columns} columns x {values_per_column} values (both must be positive)"
    )]
    InvalidLayout {
        columns: usize,
        values_per_column: usize,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
