use std::fs;
use std::time::Duration;

use coreui::theme::ThemeMode;
use log::LevelFilter;
use playbook::catalog::PageId;
use playbook::{Config, ConfigError};
use tempfile::tempdir;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.theme, ThemeMode::Dark);
    assert_eq!(config.log_level, LevelFilter::Info);
    assert_eq!(config.copy_feedback(), Duration::from_millis(2000));
    assert_eq!(config.start_page, PageId::Colors);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("playbook.json")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("playbook.json");
    fs::write(&path, r#"{ "theme": "light", "copy_feedback_ms": 500 }"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.theme, ThemeMode::Light);
    assert_eq!(config.copy_feedback(), Duration::from_millis(500));
    assert_eq!(config.log_level, LevelFilter::Info);
    assert_eq!(config.start_page, PageId::Colors);
}

#[test]
fn test_full_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("playbook.json");
    fs::write(
        &path,
        r#"{
            "theme": "dark",
            "log_level": "trace",
            "copy_feedback_ms": 1000,
            "start_page": "date-picker"
        }"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.log_level, LevelFilter::Trace);
    assert_eq!(config.start_page, PageId::DatePicker);
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("playbook.json");
    fs::write(&path, "{ theme: ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("playbook.json"));
}

#[test]
fn test_unknown_names_are_parse_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("playbook.json");

    for body in [
        r#"{ "theme": "sepia" }"#,
        r#"{ "log_level": "loud" }"#,
        r#"{ "start_page": "carousel" }"#,
    ] {
        fs::write(&path, body).unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }), "{}", body);
    }
}

#[test]
fn test_directory_is_io_error() {
    let dir = tempdir().unwrap();
    let err = Config::load_from(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
