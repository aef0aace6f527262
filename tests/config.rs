//! Configuration system tests
//!
//! Tests for config paths and loading/saving the editor config.

use codepane::config::EditorConfig;
use codepane::config_paths;
use codepane::style::Color;
use codepane::widget::WrapMode;
use codepane::TextEdit;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
        assert!(config.to_string_lossy().contains("codepane"));
    }
}

// ========================================================================
// Editor Config Tests
// ========================================================================

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let mut config = EditorConfig::default();
    config.caret_width = 4;
    config.wrap_mode = WrapMode::Character;
    config.completion.enter_selects = true;
    config.brace_match.matched = Color::rgb(0x12, 0x34, 0x56);
    config.save_to(&path).unwrap();

    let loaded = EditorConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_saved_colors_are_hex() {
    let yaml = EditorConfig::default().to_yaml().unwrap();
    assert!(yaml.contains("#00FF00") || yaml.contains("#00ff00"));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = EditorConfig::load_or_default(&dir.path().join("absent.yaml"));
    assert_eq!(config, EditorConfig::default());
}

#[test]
fn test_invalid_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "caret_width: [not, a, number]\n").unwrap();

    assert!(EditorConfig::load_from(&path).is_err());
    assert_eq!(EditorConfig::load_or_default(&path), EditorConfig::default());
}

#[test]
fn test_config_applies_to_widget() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(
        &path,
        "calltips:\n  enabled: false\ncompletion:\n  enter_selects: true\ncaret_width: 1\nwrap_mode: word\n",
    )
    .unwrap();

    let config = EditorConfig::load_or_default(&path);
    let mut edit = TextEdit::new();
    edit.setup(&config);
    assert!(!edit.calltips_enabled());
    assert!(edit.codecompletion_enter());
    assert!(edit.completion().enter_select);
    assert_eq!(edit.caret_width(), 1);
    assert_eq!(edit.wrap_mode(), WrapMode::Word);
}
