//! Persistent storage for mokup column configurations.
//!
//! A [`Configuration`](mokup_model::Configuration) is saved to and loaded
//! from a single record through the [`ConfigurationStore`] trait.
//!
//! # Record Format
//!
//! The record is pretty-printed JSON with 4-space indentation, one key per
//! column in configuration order:
//!
//! ```text
//! {
//!     "Color": [
//!         "Red",
//!         "Blue"
//!     ]
//! }
//! ```
//!
//! # Backends
//!
//! - [`JsonFileStore`] - file on disk, replaced atomically on save
//! - [`MemoryStore`] - in-process record, for tests and embedding
//!
//! A missing record loads as an empty configuration. A record that exists but
//! does not parse is reported as [`PersistenceError::Deserialization`].

mod error;
mod format;
mod store;

pub use error::{PersistenceError, Result};
pub use format::{decode_configuration, encode_configuration};
pub use store::{ConfigurationStore, DEFAULT_CONFIG_FILE, JsonFileStore, MemoryStore};
