//! Config file loading feeding the app.

use std::time::Duration;

use guess_engine::{App, ConfigError, GuessConfig};

#[test]
fn config_prefills_home_fields_and_ui_options() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r"
[app]
ascii_only = true
reduced_motion = true

[game]
return_home_delay_ms = 1200
default_min = 1
default_max = 50
",
    )
    .expect("write config");

    let config = GuessConfig::load_from(&path)
        .expect("valid config")
        .expect("config present");
    let app = App::new(Some(&config));

    let home = app.home().expect("starts on home");
    assert_eq!(home.min().text(), "1");
    assert_eq!(home.max().text(), "50");
    assert!(app.ui_options().ascii_only);
    assert!(app.ui_options().reduced_motion);
    assert!(!app.ui_options().high_contrast);

    // The environment may override the delay; only check it resolved to something.
    assert!(app.settings().return_home_delay > Duration::ZERO);
}

#[test]
fn unreadable_config_reports_its_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[app\nascii_only = ").expect("write config");

    let err = GuessConfig::load_from(&path).expect_err("parse failure");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), &path);
}

#[test]
fn no_config_starts_with_blank_fields() {
    let app = App::new(None);
    let home = app.home().expect("starts on home");
    assert!(home.min().is_empty());
    assert!(home.max().is_empty());
}
