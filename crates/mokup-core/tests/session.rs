//! End-to-end session behavior against the file-backed store.

use std::fs;

use mokup_core::{LoadOutcome, Session, SessionError, Settings};
use mokup_model::{Configuration, SlotLayout};
use mokup_persistence::{JsonFileStore, MemoryStore, PersistenceError};
use mokup_synth::{RowSynthesizer, SynthError};
use tempfile::tempdir;

fn config(pairs: &[(&str, &[&str])]) -> Configuration {
    pairs
        .iter()
        .map(|(header, values)| {
            (
                *header,
                values.iter().map(|v| (*v).to_string()).collect::<Vec<_>>(),
            )
        })
        .collect()
}

#[test]
fn edit_save_reload_into_fresh_session() {
    let dir = tempdir().unwrap();
    let record = dir.path().join("column_config.json");

    let mut first = Session::new(JsonFileStore::new(&record), SlotLayout::default());
    first.set_column(0, "Color", ["Red", "Blue"]).unwrap();
    first.set_column(1, "Size", ["S", "M", "L"]).unwrap();
    let saved = first.collect_current_configuration();
    first.request_save(&saved).unwrap();

    let mut second = Session::new(JsonFileStore::new(&record), SlotLayout::default());
    let outcome = second.load_into_slots().unwrap();

    assert_eq!(
        outcome,
        LoadOutcome::Applied {
            columns: 2,
            dropped: 0
        }
    );
    assert_eq!(second.collect_current_configuration(), saved);
}

#[test]
fn saving_empty_configuration_is_rejected() {
    let dir = tempdir().unwrap();
    let record = dir.path().join("column_config.json");
    let mut session = Session::new(JsonFileStore::new(&record), SlotLayout::default());

    let err = session.request_save(&Configuration::new()).unwrap_err();

    assert!(matches!(err, SessionError::EmptyConfiguration));
    assert!(!record.exists());
}

#[test]
fn load_without_record_leaves_slots_alone() {
    let dir = tempdir().unwrap();
    let mut session = Session::new(
        JsonFileStore::new(dir.path().join("column_config.json")),
        SlotLayout::default(),
    );
    session.set_column(0, "Keep", ["me"]).unwrap();

    assert_eq!(session.load_into_slots().unwrap(), LoadOutcome::Empty);
    assert_eq!(
        session.collect_current_configuration(),
        config(&[("Keep", &["me"])])
    );
}

#[test]
fn corrupt_record_fails_load_and_keeps_slots() {
    let mut session = Session::new(
        MemoryStore::with_record("{\"X\": [\"1\", "),
        SlotLayout::default(),
    );
    session.set_column(0, "Keep", ["me"]).unwrap();

    let err = session.load_into_slots().unwrap_err();

    assert!(matches!(
        err,
        SessionError::Persistence(PersistenceError::Deserialization { .. })
    ));
    assert_eq!(
        session.collect_current_configuration(),
        config(&[("Keep", &["me"])])
    );
}

#[test]
fn generate_writes_csv_to_output_path() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.csv");
    let session = Session::new(MemoryStore::new(), SlotLayout::default())
        .with_synthesizer(RowSynthesizer::with_seed(7))
        .with_output_path(&output);
    let cfg = config(&[("Color", &["Red", "Blue"]), ("Size", &["S", "M", "L"])]);

    let report = session.request_generate(&cfg, 3).unwrap();

    assert_eq!(report.rows, 3);
    assert_eq!(report.columns, 2);
    assert_eq!(report.seed, Some(7));
    let text = fs::read_to_string(&output).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Color,Size");
    for line in &lines[1..] {
        let (color, size) = line.split_once(',').unwrap();
        assert!(["Red", "Blue"].contains(&color));
        assert!(["S", "M", "L"].contains(&size));
    }
}

#[test]
fn same_seed_same_file() {
    let dir = tempdir().unwrap();
    let cfg = config(&[("N", &["1", "2", "3", "4", "5"])]);
    let render = |name: &str| {
        let path = dir.path().join(name);
        Session::new(MemoryStore::new(), SlotLayout::default())
            .with_synthesizer(RowSynthesizer::with_seed(99))
            .with_output_path(&path)
            .request_generate(&cfg, 50)
            .unwrap();
        fs::read_to_string(path).unwrap()
    };

    assert_eq!(render("a.csv"), render("b.csv"));
}

#[test]
fn invalid_generate_arguments_write_nothing() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.csv");
    let session =
        Session::new(MemoryStore::new(), SlotLayout::default()).with_output_path(&output);

    let bad_rows = session
        .request_generate(&config(&[("A", &["1"])]), 0)
        .unwrap_err();
    let empty = session.request_generate(&Configuration::new(), 5).unwrap_err();
    let both = session.request_generate(&Configuration::new(), -1).unwrap_err();

    assert!(matches!(bad_rows, SessionError::Synth(e) if e.is_invalid_argument()));
    assert!(matches!(empty, SessionError::EmptyConfiguration));
    assert!(matches!(
        both,
        SessionError::Synth(SynthError::InvalidRowCount { .. })
    ));
    assert!(!output.exists());
}

#[test]
fn initial_preset_is_optional() {
    let dir = tempdir().unwrap();
    let mut session = Session::new(MemoryStore::new(), SlotLayout::default());

    let applied = session
        .load_initial_preset(&dir.path().join("data_config.toml"))
        .unwrap();

    assert_eq!(applied, 0);
    assert!(session.collect_current_configuration().is_empty());
}

#[test]
fn initial_preset_seeds_slots() {
    let dir = tempdir().unwrap();
    let preset = dir.path().join("data_config.toml");
    fs::write(
        &preset,
        "[[columns]]\nheader = \"Size\"\nvalues = [\"S\", \"M\"]\n",
    )
    .unwrap();
    let mut session = Session::new(MemoryStore::new(), SlotLayout::default());

    assert_eq!(session.load_initial_preset(&preset).unwrap(), 1);
    assert_eq!(
        session.collect_current_configuration(),
        config(&[("Size", &["S", "M"])])
    );
}

#[test]
fn explicit_preset_must_exist() {
    let dir = tempdir().unwrap();
    let mut session = Session::new(MemoryStore::new(), SlotLayout::default());

    let err = session
        .apply_preset(&dir.path().join("missing.toml"))
        .unwrap_err();

    assert!(matches!(err, SessionError::Preset(_)));
    assert!(err.suggestion().is_some());
}

#[test]
fn session_follows_settings() {
    let dir = tempdir().unwrap();
    let mut settings = Settings::default();
    settings.layout = SlotLayout::new(2, 3).unwrap();
    settings.output.path = dir.path().join("settings.csv");

    let session = Session::from_settings(MemoryStore::new(), &settings);

    assert_eq!(session.columns().len(), 2);
    assert_eq!(session.columns()[0].capacity(), 3);
    assert_eq!(session.output_path(), settings.output.path.as_path());
}
