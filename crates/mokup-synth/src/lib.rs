//! Row sampling and CSV emission.
//!
//! Every cell is an independent, uniform draw (with replacement) from its
//! column's candidate values. A value listed twice is twice as likely to be
//! drawn; that is the only weighting mechanism.
//!
//! ```ignore
//! use mokup_synth::{RowSynthesizer, write_document};
//!
//! let document = RowSynthesizer::with_seed(7).generate(&config, 500)?;
//! write_document(&document, Path::new("mokup-00.csv"))?;
//! ```

mod document;
mod error;
mod output;
mod row_count;
mod synthesizer;

pub use document::CsvDocument;
pub use error::{Result, SynthError};
pub use output::{DEFAULT_OUTPUT_FILE, write_document};
pub use row_count::RowCount;
pub use synthesizer::RowSynthesizer;
