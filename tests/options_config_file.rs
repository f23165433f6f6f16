//! Tests for parsing options from config files.

use std::fs;

use audiohost::options::{
    app_options, AppOption, ArgumentArity, OptionEntry, OptionRegistry, OptionsError, Tokens,
    ValueKind,
};
use tempfile::TempDir;

fn config_file_options() -> OptionRegistry {
    let mut registry = OptionRegistry::new(2);
    registry
        .register(OptionEntry::new(0, "test", "test help", true, ValueKind::String, ArgumentArity::None))
        .unwrap();
    registry
        .register(OptionEntry::new(1, "other", "test help", true, ValueKind::String, ArgumentArity::Required))
        .unwrap();
    registry
}

#[test]
fn parse_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("options.txt");
    fs::write(&path, "--test\n-o\nfoo\n").unwrap();

    let mut registry = config_file_options();
    registry.parse_config_file(&path).unwrap();

    assert!(registry.is_enabled(0));
    assert!(registry.is_enabled(1));
    assert_eq!(registry.get_string(1), Some("foo"));
}

#[test]
fn parse_config_tokens_without_program_name() {
    let mut registry = config_file_options();
    let tokens = Tokens::from_lines("--test\n-o\nfoo\n".as_bytes()).unwrap();
    registry.parse(&tokens).unwrap();

    assert!(registry.is_enabled(0));
    assert_eq!(registry.get_string(1), Some("foo"));
}

#[test]
fn parse_config_file_keeps_spaces_inside_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("options.txt");
    fs::write(&path, "  --other  \n\n  My Song.wav\n").unwrap();

    let mut registry = config_file_options();
    registry.parse_config_file(&path).unwrap();
    assert_eq!(registry.get_string(1), Some("My Song.wav"));
}

#[test]
fn parse_missing_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("invalid");

    let mut registry = config_file_options();
    let err = registry.parse_config_file(&path).unwrap_err();
    assert!(matches!(err, OptionsError::ConfigFileNotFound { .. }));
}

#[test]
fn parse_directory_as_config_file() {
    let dir = TempDir::new().unwrap();

    let mut registry = config_file_options();
    let err = registry.parse_config_file(dir.path()).unwrap_err();
    assert!(matches!(err, OptionsError::ConfigFileNotFound { .. }));
}

#[test]
fn parse_config_file_with_invalid_options() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("options.txt");
    fs::write(&path, "--test\n-s\n").unwrap();

    let mut registry = config_file_options();
    let err = registry.parse_config_file(&path).unwrap_err();
    assert!(matches!(err, OptionsError::UnknownOption { ref token } if token == "-s"));
    assert!(registry.is_enabled(0));
    assert!(!registry.is_enabled(1));
}

#[test]
fn config_file_adds_to_command_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.txt");
    fs::write(&path, "--plugin\ndelay\n--tempo\n90\n").unwrap();

    let mut options = app_options().unwrap();
    options
        .parse_args(["audiohost", "-p", "again", "--config-file", path.to_str().unwrap()])
        .unwrap();
    options.parse_config_file(&path).unwrap();

    assert_eq!(
        options.get_list(AppOption::Plugin.index()),
        Some(&["again".to_string(), "delay".to_string()][..])
    );
    assert_eq!(options.get_number(AppOption::Tempo.index()), 90.0);
}
