//! Tests for settings loading.

use std::io::Write;
use std::path::PathBuf;

use strictly_timetravel_tui::Settings;

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert!(*settings.show_hints());
    assert_eq!(
        settings.log_file(),
        &PathBuf::from("strictly_timetravel.log")
    );
    assert_eq!(settings.log_filter(), "info");
}

#[test]
fn test_partial_file_fills_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, "show_hints = false").expect("Write settings");

    let settings = Settings::from_file(file.path()).expect("Valid settings");
    assert!(!*settings.show_hints());
    assert_eq!(settings.log_filter(), "info");
}

#[test]
fn test_full_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(
        file,
        "show_hints = true\nlog_file = \"game.log\"\nlog_filter = \"debug\""
    )
    .expect("Write settings");

    let settings = Settings::load(Some(file.path())).expect("Valid settings");
    assert_eq!(settings.log_file(), &PathBuf::from("game.log"));
    assert_eq!(settings.log_filter(), "debug");
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, "show_hints = \"sometimes\"").expect("Write settings");

    let err = Settings::from_file(file.path()).expect_err("Bad type");
    assert!(err.message.contains("Failed to parse settings"));
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let missing = dir.path().join("absent.toml");
    let err = Settings::load(Some(missing.as_path())).expect_err("Missing file");
    assert!(err.message.contains("Failed to read settings file"));
}

#[test]
fn test_log_file_override() {
    let settings = Settings::default().with_log_file(PathBuf::from("other.log"));
    assert_eq!(settings.log_file(), &PathBuf::from("other.log"));
}
