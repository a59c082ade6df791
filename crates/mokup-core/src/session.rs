//! The orchestrator between an editing surface, the store and the synthesizer.

use std::path::{Path, PathBuf};

use mokup_model::{ColumnConfig, ColumnSlots, Configuration, SlotLayout};
use mokup_persistence::ConfigurationStore;
use mokup_synth::{CsvDocument, RowSynthesizer, write_document};
use tracing::{debug, info, warn};

use crate::error::{Result, SessionError};
use crate::preset::{PresetError, load_preset};
use crate::settings::Settings;

/// Result of loading the stored configuration into the editing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing was saved yet; the editing state was left as it was.
    Empty,
    /// The editing state now holds the stored configuration.
    Applied {
        columns: usize,
        /// Stored columns that did not fit the layout.
        dropped: usize,
    },
}

/// What a successful generation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output_path: PathBuf,
    pub rows: usize,
    pub columns: usize,
    pub seed: Option<u64>,
}

/// Editing state plus the collaborators it feeds.
///
/// Every operation runs to completion on the calling thread. Failed
/// operations leave the editing state and the stored record untouched.
#[derive(Debug)]
pub struct Session<S> {
    layout: SlotLayout,
    columns: Vec<ColumnSlots>,
    store: S,
    synthesizer: RowSynthesizer,
    output_path: PathBuf,
}

impl<S: ConfigurationStore> Session<S> {
    pub fn new(store: S, layout: SlotLayout) -> Self {
        Self {
            layout,
            columns: (0..layout.columns)
                .map(|_| ColumnSlots::new(layout.values_per_column))
                .collect(),
            store,
            synthesizer: RowSynthesizer::new(),
            output_path: PathBuf::from(mokup_synth::DEFAULT_OUTPUT_FILE),
        }
    }

    /// Build a session shaped by `settings` (layout and output path).
    pub fn from_settings(store: S, settings: &Settings) -> Self {
        Self::new(store, settings.layout).with_output_path(settings.output.path.clone())
    }

    pub fn with_synthesizer(mut self, synthesizer: RowSynthesizer) -> Self {
        self.synthesizer = synthesizer;
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn layout(&self) -> SlotLayout {
        self.layout
    }

    pub fn columns(&self) -> &[ColumnSlots] {
        &self.columns
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn column_mut(&mut self, index: usize) -> Result<&mut ColumnSlots> {
        let columns = self.columns.len();
        self.columns
            .get_mut(index)
            .ok_or(SessionError::ColumnOutOfRange { index, columns })
    }

    /// Replace one column's header and values. Returns how many values did not fit.
    pub fn set_column<I, V>(&mut self, index: usize, header: impl Into<String>, values: I) -> Result<usize>
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let slots = self.column_mut(index)?;
        let overflow = slots.set(header, values);
        if overflow > 0 {
            warn!(column = index, overflow, "values beyond the slot capacity were dropped");
        }
        Ok(overflow)
    }

    pub fn clear_all(&mut self) {
        for column in &mut self.columns {
            column.clear();
        }
    }

    /// Clear the editing state and fill it from `config`, in order.
    ///
    /// Columns past the layout are dropped. Returns how many were applied.
    pub fn apply_configuration(&mut self, config: &Configuration) -> usize {
        self.clear_all();
        let mut applied = 0;
        for (index, (slots, (header, values))) in self.columns.iter_mut().zip(config.iter()).enumerate() {
            let overflow = slots.set(header, values.iter().cloned());
            if overflow > 0 {
                warn!(column = index, header, overflow, "values beyond the slot capacity were dropped");
            }
            applied += 1;
        }
        let dropped = config.len() - applied;
        if dropped > 0 {
            warn!(dropped, columns = self.layout.columns, "columns beyond the layout were dropped");
        }
        applied
    }

    /// Apply the preset at `path` if it exists. A missing file is not an error.
    pub fn load_initial_preset(&mut self, path: &Path) -> Result<usize> {
        match load_preset(path) {
            Ok(config) => Ok(self.apply_configuration(&config)),
            Err(PresetError::NotFound { .. }) => {
                debug!(path = %path.display(), "no start-up preset");
                Ok(0)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Apply the preset at `path`, which must exist.
    pub fn apply_preset(&mut self, path: &Path) -> Result<usize> {
        let config = load_preset(path)?;
        Ok(self.apply_configuration(&config))
    }

    /// Assemble the active columns of the editing state.
    pub fn collect_current_configuration(&self) -> Configuration {
        assemble(self.columns.iter().map(ColumnSlots::get))
    }

    /// Persist `config`, replacing whatever was stored.
    pub fn request_save(&mut self, config: &Configuration) -> Result<()> {
        if config.is_empty() {
            return Err(SessionError::EmptyConfiguration);
        }
        self.store.save(config)?;
        info!(location = %self.store.location(), columns = config.len(), "configuration saved");
        Ok(())
    }

    /// Read the stored configuration without touching the editing state.
    pub fn request_load(&self) -> Result<Configuration> {
        Ok(self.store.load()?)
    }

    /// Load the stored configuration into the editing state.
    pub fn load_into_slots(&mut self) -> Result<LoadOutcome> {
        let config = self.request_load()?;
        if config.is_empty() {
            info!(location = %self.store.location(), "no saved configuration found");
            return Ok(LoadOutcome::Empty);
        }
        let columns = self.apply_configuration(&config);
        Ok(LoadOutcome::Applied {
            columns,
            dropped: config.len() - columns,
        })
    }

    /// Synthesize a document in memory.
    pub fn generate_document(&self, config: &Configuration, row_count: i64) -> Result<CsvDocument> {
        Ok(self.synthesizer.generate(config, row_count)?)
    }

    /// Synthesize `row_count` rows and write them to the output path.
    pub fn request_generate(&self, config: &Configuration, row_count: i64) -> Result<GenerationReport> {
        let document = self.generate_document(config, row_count)?;
        write_document(&document, &self.output_path)?;
        let report = GenerationReport {
            output_path: self.output_path.clone(),
            rows: document.row_count(),
            columns: document.headers().len(),
            seed: self.synthesizer.seed(),
        };
        info!(
            path = %report.output_path.display(),
            rows = report.rows,
            columns = report.columns,
            "CSV generated"
        );
        Ok(report)
    }
}

/// Build a configuration from columns, skipping inactive ones.
///
/// A repeated header replaces the earlier column's values in place.
pub(crate) fn assemble<I>(columns: I) -> Configuration
where
    I: IntoIterator<Item = ColumnConfig>,
{
    let mut config = Configuration::new();
    for column in columns.into_iter().filter(ColumnConfig::is_active) {
        let (header, values) = column.into_parts();
        if config.insert(header.clone(), values).is_some() {
            warn!(header = %header, "duplicate column header, later values win");
        }
    }
    config
}
