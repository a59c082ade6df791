use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info_span, warn};

use mokup_core::{
    DEFAULT_SETTINGS_FILE, GenerationReport, LoadOutcome, Session, SessionError, Settings,
};
use mokup_model::Configuration;
use mokup_persistence::JsonFileStore;
use mokup_synth::{RowCount, RowSynthesizer};

use crate::cli::{GenerateArgs, SourceArgs};

/// Read settings from `--config`, or from `mokup.toml` when present.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("settings file not found: {}", path.display());
            }
            Settings::load_from(path).context("load settings")
        }
        None => Settings::load_from(Path::new(DEFAULT_SETTINGS_FILE)).context("load settings"),
    }
}

pub fn run_generate(settings: &Settings, args: &GenerateArgs) -> Result<GenerationReport> {
    let span = info_span!("generate");
    let _guard = span.enter();

    let rows = match &args.rows {
        Some(text) => parse_rows(text)?,
        None => settings.output.rows,
    };
    let mut session = open_session(settings);
    if let Some(path) = &args.output {
        session = session.with_output_path(path);
    }
    if let Some(seed) = args.seed {
        session = session.with_synthesizer(RowSynthesizer::with_seed(seed));
    }
    apply_sources(&mut session, settings, &args.sources)?;

    let config = session.collect_current_configuration();
    Ok(session.request_generate(&config, rows)?)
}

pub fn run_save(settings: &Settings, sources: &SourceArgs) -> Result<Configuration> {
    let span = info_span!("save");
    let _guard = span.enter();

    let mut session = open_session(settings);
    apply_sources(&mut session, settings, sources)?;
    let config = session.collect_current_configuration();
    session.request_save(&config)?;
    Ok(config)
}

pub fn run_show(settings: &Settings) -> Result<Configuration> {
    let session = open_session(settings);
    Ok(session.request_load()?)
}

fn open_session(settings: &Settings) -> Session<JsonFileStore> {
    Session::from_settings(JsonFileStore::new(&settings.store.path), settings)
}

fn apply_sources(
    session: &mut Session<JsonFileStore>,
    settings: &Settings,
    sources: &SourceArgs,
) -> Result<()> {
    let seeded = session.load_initial_preset(&settings.preset)?;
    debug!(preset = %settings.preset.display(), columns = seeded, "start-up preset");

    if let Some(path) = &sources.preset {
        session.apply_preset(path)?;
    }
    if sources.from_store {
        match session.load_into_slots()? {
            LoadOutcome::Empty => warn!("no saved configuration found"),
            LoadOutcome::Applied { columns, dropped } => {
                debug!(columns, dropped, "applied stored configuration");
            }
        }
    }
    if !sources.columns.is_empty() {
        session.clear_all();
        for (index, column) in sources.columns.iter().enumerate() {
            session.set_column(index, column.header.as_str(), column.values.iter().cloned())?;
        }
    }
    Ok(())
}

fn parse_rows(text: &str) -> Result<i64, SessionError> {
    let rows: RowCount = text.parse()?;
    Ok(i64::try_from(rows.get()).unwrap_or(i64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_must_be_positive_integers() {
        assert_eq!(parse_rows("25").unwrap(), 25);
        for bad in ["0", "-4", "ten", "2.5", ""] {
            let err = parse_rows(bad).unwrap_err();
            assert_eq!(
                err.user_message(),
                "Number of rows must be a positive whole number",
                "{bad:?}"
            );
        }
    }
}
