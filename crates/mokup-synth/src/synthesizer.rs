//! Uniform, independent per-cell sampling.

use mokup_model::Configuration;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info_span, trace};

use crate::document::CsvDocument;
use crate::error::{Result, SynthError};
use crate::row_count::RowCount;

/// Builds CSV documents from a [`Configuration`].
///
/// Without a seed every call draws from a fresh OS-seeded generator. With a
/// seed, the same configuration and row count always produce the same
/// document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowSynthesizer {
    seed: Option<u64>,
}

impl RowSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Synthesize `row_count` rows.
    ///
    /// # Errors
    ///
    /// - [`SynthError::InvalidRowCount`] when `row_count` is zero or negative
    /// - [`SynthError::EmptyConfiguration`] when `config` has no columns
    /// - [`SynthError::EmptyColumn`] when a column has no values
    pub fn generate(&self, config: &Configuration, row_count: i64) -> Result<CsvDocument> {
        let row_count = RowCount::try_from(row_count)?;
        let mut rng = self.rng();
        self.generate_with_rng(config, row_count, &mut rng)
    }

    /// Synthesize with a caller-supplied random source.
    pub fn generate_with_rng<R: Rng>(
        &self,
        config: &Configuration,
        row_count: RowCount,
        rng: &mut R,
    ) -> Result<CsvDocument> {
        if config.is_empty() {
            return Err(SynthError::EmptyConfiguration);
        }
        if let Some((header, _)) = config.iter().find(|(_, values)| values.is_empty()) {
            return Err(SynthError::EmptyColumn {
                header: header.to_string(),
            });
        }

        let span = info_span!("synthesize", columns = config.len(), rows = row_count.get());
        let _guard = span.enter();

        let headers: Vec<String> = config.headers().map(str::to_string).collect();
        let rows: Vec<Vec<String>> = (0..row_count.get())
            .map(|row| {
                let record = config
                    .iter()
                    .map(|(_, values)| sample(values, rng))
                    .collect::<Vec<_>>();
                trace!(row, ?record, "sampled row");
                record
            })
            .collect();

        debug!(seed = ?self.seed, "rows synthesized");
        Ok(CsvDocument::new(headers, rows))
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// One uniform draw; `values` is never empty here.
fn sample<R: Rng>(values: &[String], rng: &mut R) -> String {
    let index = rng.random_range(0..values.len());
    values[index].clone()
}
