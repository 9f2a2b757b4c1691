//! Integration tests for Settings layered loading.
//!
//! These tests pass config paths explicitly (temp directories only), so they
//! never read the user's real global config.

use std::fs;

use tempfile::TempDir;

use tempconv::application::ApplicationError;
use tempconv::config::Settings;

fn write_config(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn given_global_config_when_loading_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let global = write_config(
        &dir,
        "tempconv.toml",
        r#"
[server]
port = 9090
"#,
    );

    let settings = Settings::load_from(Some(&global), None).expect("load settings");

    assert_eq!(settings.server.port, 9090);
    assert_eq!(settings.server.host, "127.0.0.1", "unset keys keep defaults");
    assert_eq!(settings.page.title, "Temperature Conversion");
}

#[test]
fn given_global_and_explicit_config_when_loading_then_explicit_wins() {
    let dir = TempDir::new().unwrap();
    let global = write_config(
        &dir,
        "tempconv.toml",
        r#"
[server]
host = "0.0.0.0"
port = 9090

[page]
title = "Global"
"#,
    );
    let explicit = write_config(
        &dir,
        "custom.toml",
        r#"
[page]
title = "Explicit"
"#,
    );

    let settings = Settings::load_from(Some(&global), Some(&explicit)).expect("load settings");

    assert_eq!(settings.page.title, "Explicit");
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 9090);
}

#[test]
fn given_missing_global_config_when_loading_then_skipped() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let settings = Settings::load_from(Some(&missing), None).expect("load settings");

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_missing_explicit_config_when_loading_then_config_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = Settings::load_from(None, Some(&missing)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn given_explicit_config_without_extension_when_loading_then_parsed_as_toml() {
    let dir = TempDir::new().unwrap();
    let explicit = write_config(&dir, "tempconvrc", "[server]\nport = 7070\n");

    let settings = Settings::load_from(None, Some(&explicit)).expect("load settings");

    assert_eq!(settings.server.port, 7070);
}

#[test]
fn given_malformed_config_when_loading_then_config_error() {
    let dir = TempDir::new().unwrap();
    let explicit = write_config(&dir, "broken.toml", "[server\nport = ");

    let err = Settings::load_from(None, Some(&explicit)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
}

#[test]
fn given_out_of_range_port_when_loading_then_config_error() {
    let dir = TempDir::new().unwrap();
    let explicit = write_config(&dir, "port.toml", "[server]\nport = 70000\n");

    let err = Settings::load_from(None, Some(&explicit)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
}

#[test]
fn given_effective_settings_when_showing_then_toml_contains_sections() {
    let settings = Settings::default();

    let text = settings.to_toml().expect("serialize");

    assert!(text.contains("[server]"));
    assert!(text.contains("port = 8080"));
    assert!(text.contains("[page]"));
}
