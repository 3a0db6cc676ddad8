use std::fs;

use playbook::paths;
use tempfile::tempdir;

fn log_names(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".log"))
        .collect();
    names.sort();
    names
}

#[test]
fn test_rotate_archives_latest() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("latest.log"), "previous session").unwrap();

    paths::rotate_logs_in(dir.path());

    let names = log_names(dir.path());
    assert_eq!(names.len(), 1);
    assert_ne!(names[0], "latest.log");
    let archived = fs::read_to_string(dir.path().join(&names[0])).unwrap();
    assert_eq!(archived, "previous session");
}

#[test]
fn test_rotate_keeps_last_25() {
    let dir = tempdir().unwrap();
    for i in 0..30 {
        fs::write(dir.path().join(format!("2020010{}_0000{:02}.log", i % 10, i)), "").unwrap();
    }
    fs::write(dir.path().join("notes.txt"), "not a log").unwrap();

    paths::rotate_logs_in(dir.path());

    assert_eq!(log_names(dir.path()).len(), 25);
    assert!(dir.path().join("notes.txt").exists());
}

#[test]
fn test_rotate_empty_dir() {
    let dir = tempdir().unwrap();
    paths::rotate_logs_in(dir.path());
    assert!(log_names(dir.path()).is_empty());
}

#[test]
fn test_files_live_under_platform_dirs() {
    if let (Some(config), Some(dir)) = (paths::config_file(), paths::config_dir()) {
        assert!(config.starts_with(dir));
        assert!(config.ends_with("playbook.json"));
    }
    if let (Some(log), Some(dir)) = (paths::log_file(), paths::data_dir()) {
        assert!(log.starts_with(dir));
        assert!(log.ends_with("latest.log"));
    }
}
