use super::Config;
use crate::settings::Settings;
use crate::token::NumberingStyle;
use std::fs;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let config = Config::load_from(&dir.path().join("headnum.toml"));

    assert_eq!(config, Config::default());
    assert_eq!(config.settings(), Settings::default());
}

#[test]
fn test_directive_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("headnum.toml");
    fs::write(&path, "directive = \"max 3, contents Contents, 1.A.\"\n").unwrap();

    let settings = Config::load_from(&path).settings();

    assert_eq!(settings.max_level, 3);
    assert_eq!(settings.contents, "Contents");
    assert_eq!(settings.style_level_other, NumberingStyle::Letter);
}

#[test]
fn test_malformed_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("headnum.toml");
    fs::write(&path, "directive = [unterminated\n").unwrap();

    assert_eq!(Config::load_from(&path), Config::default());
}
