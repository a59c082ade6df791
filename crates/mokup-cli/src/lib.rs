//! Library pieces of the `mokup` command-line tool.

pub mod column_arg;
pub mod logging;

pub use column_arg::{ColumnArg, ColumnArgError};
