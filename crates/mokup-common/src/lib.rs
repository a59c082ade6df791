//! Shared utilities for mokup crates.

pub mod fs;

pub use fs::{AtomicWriteError, temp_path_for, write_atomic};
