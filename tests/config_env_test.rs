//! Environment variable overrides for Settings.
//!
//! Kept in its own test binary: it mutates process environment variables,
//! which would race with config loading in other tests.

use std::env;
use std::fs;

use tempfile::TempDir;

use tempconv::config::Settings;

#[test]
fn given_env_vars_when_loading_then_override_config_files() {
    let dir = TempDir::new().unwrap();
    let explicit = dir.path().join("tempconv.toml");
    fs::write(&explicit, "[server]\nport = 7000\n\n[page]\ntitle = \"From file\"\n").unwrap();

    env::set_var("TEMPCONV_SERVER__PORT", "9100");
    env::set_var("TEMPCONV_PAGE__TITLE", "From env");

    let result = Settings::load_from(None, Some(&explicit));

    env::remove_var("TEMPCONV_SERVER__PORT");
    env::remove_var("TEMPCONV_PAGE__TITLE");

    let settings = result.expect("load settings");
    assert_eq!(settings.server.port, 9100);
    assert_eq!(settings.page.title, "From env");
    assert_eq!(settings.server.host, "127.0.0.1");
}
