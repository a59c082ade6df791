//! Session orchestration for mokup.
//!
//! # Architecture
//!
//! The [`Session`] bundles the pieces an editing surface talks to:
//!
//! - **Editing state**: one [`ColumnSlots`](mokup_model::ColumnSlots) per column, shaped by a [`SlotLayout`](mokup_model::SlotLayout)
//! - **Store**: any [`ConfigurationStore`](mokup_persistence::ConfigurationStore) backend
//! - **Synthesizer**: a [`RowSynthesizer`](mokup_synth::RowSynthesizer), optionally seeded
//! - **Output path**: where generated CSV files land
//!
//! [`Settings`] supplies defaults for all of these from `mokup.toml`, and
//! [`load_preset`] reads column presets used to seed the editing state.

pub mod error;
pub mod preset;
pub mod session;
pub mod settings;

pub use error::{Result, SessionError};
pub use preset::{PresetError, load_preset};
pub use session::{GenerationReport, LoadOutcome, Session};
pub use settings::{
    DEFAULT_PRESET_FILE, DEFAULT_ROW_COUNT, DEFAULT_SETTINGS_FILE, OutputSettings, Settings, SettingsError,
    StoreSettings,
};
