//! Configuration store contract and its backends.

mod file;
mod memory;

pub use file::{DEFAULT_CONFIG_FILE, JsonFileStore};
pub use memory::MemoryStore;

use mokup_model::Configuration;

use crate::error::Result;

/// Durable home for a single [`Configuration`] record.
///
/// Implementations overwrite the whole record on [`save`](Self::save) and
/// return it whole on [`load`](Self::load). Loading before anything was
/// saved yields an empty configuration rather than an error.
pub trait ConfigurationStore {
    /// Replace the stored record with `config`.
    fn save(&mut self, config: &Configuration) -> Result<()>;

    /// Read the stored record.
    fn load(&self) -> Result<Configuration>;

    /// Human-readable description of where the record lives.
    fn location(&self) -> String;
}

impl<S: ConfigurationStore + ?Sized> ConfigurationStore for Box<S> {
    fn save(&mut self, config: &Configuration) -> Result<()> {
        (**self).save(config)
    }

    fn load(&self) -> Result<Configuration> {
        (**self).load()
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
