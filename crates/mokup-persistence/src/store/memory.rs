//! In-memory backend.

use mokup_model::Configuration;

use super::ConfigurationStore;
use crate::error::Result;
use crate::format::{decode_configuration, encode_configuration};

const LOCATION: &str = "memory";

/// Keeps the encoded record in memory.
///
/// The record goes through the same encoding as the file backend, so a
/// store seeded with [`MemoryStore::with_record`] behaves like a file with
/// that content.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Option<Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw record bytes, valid or not.
    pub fn with_record(record: impl Into<Vec<u8>>) -> Self {
        Self {
            record: Some(record.into()),
        }
    }
}

impl ConfigurationStore for MemoryStore {
    fn save(&mut self, config: &Configuration) -> Result<()> {
        self.record = Some(encode_configuration(config)?);
        tracing::debug!(columns = config.len(), "saved configuration in memory");
        Ok(())
    }

    fn load(&self) -> Result<Configuration> {
        match &self.record {
            Some(bytes) => decode_configuration(bytes, LOCATION),
            None => Ok(Configuration::new()),
        }
    }

    fn location(&self) -> String {
        LOCATION.to_string()
    }
}
