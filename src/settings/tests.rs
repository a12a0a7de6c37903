use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.tab_width, 4);
    assert!(settings.expand_tabs);
    assert_eq!(settings.autosave_interval(), Some(Duration::from_secs(5)));
    assert_eq!(settings.poll_timeout(), Duration::from_millis(16));
    assert_eq!(settings.clipboard_timeout(), Duration::from_millis(500));
    assert_eq!(settings.shift_repeat_window(), None);
    assert_eq!(settings.theme, "dark");
}

#[test]
fn test_empty_file_is_defaults() {
    assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
}

#[test]
fn test_partial_override() {
    let settings = Settings::from_toml_str(
        r#"
tab_width = 8
expand_tabs = false
theme = "light"
shift_repeat_window_ms = 40
"#,
    )
    .unwrap();
    assert_eq!(settings.tab_width, 8);
    assert!(!settings.expand_tabs);
    assert_eq!(settings.theme, "light");
    assert_eq!(settings.shift_repeat_window(), Some(Duration::from_millis(40)));
    assert_eq!(settings.poll_timeout_ms, 16);
}

#[test]
fn test_zero_autosave_disables() {
    let settings = Settings::from_toml_str("autosave_interval_secs = 0").unwrap();
    assert_eq!(settings.autosave_interval(), None);
}

#[test]
fn test_zero_tab_width_clamped() {
    let settings = Settings::from_toml_str("tab_width = 0").unwrap();
    assert_eq!(settings.tab_width, 1);
}

#[test]
fn test_invalid_toml_is_settings_error() {
    let err = Settings::from_toml_str("tab_width = \"wide\"").unwrap_err();
    assert_eq!(err.kind, ErrorType::Settings);
    assert_eq!(err.code, errors::SETTINGS_PARSE);
}

#[test]
fn test_unknown_field_rejected() {
    assert!(Settings::from_toml_str("tabwidth = 2").is_err());
}

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "poll_timeout_ms = 100").unwrap();
    let settings = Settings::from_file(file.path()).unwrap().unwrap();
    assert_eq!(settings.poll_timeout(), Duration::from_millis(100));
}

#[test]
fn test_missing_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(Settings::from_file(&dir.path().join("absent.toml")).unwrap(), None);
}

#[test]
fn test_load_falls_back_on_invalid_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "this is not toml [").unwrap();
    assert_eq!(Settings::load(Some(file.path())), Settings::default());
}

#[test]
fn test_load_explicit_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load(Some(&dir.path().join("nope.toml")));
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_default_path_location() {
    if let Some(path) = Settings::default_path() {
        assert!(path.ends_with("seditor/config.toml"));
    }
}
