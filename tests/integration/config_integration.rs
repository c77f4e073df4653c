//! Integration tests for configuration loading

use daybook::config::DaybookConfig;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn defaults_apply_without_a_file() {
    let config = DaybookConfig::load(None).unwrap();
    assert_eq!(config.executor.retry_count, 2);
    assert_eq!(config.executor.retry_delay_ms, 1000);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn file_values_override_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("daybook.toml");
    std::fs::write(
        &path,
        r#"
[storage]
path = "/tmp/daybook-test-store"

[executor]
retry_count = 4
retry_delay_ms = 250

[notifications]
display_ms = 1500

[logging]
level = "debug"
format = "json"
"#,
    )
    .unwrap();

    let config = DaybookConfig::load(Some(&path)).unwrap();
    assert_eq!(config.executor.retry_count, 4);
    assert_eq!(config.executor.retry_delay_ms, 250);
    assert_eq!(
        config.notifications.display_duration(),
        Duration::from_millis(1500)
    );
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");

    let opts = config.executor.store_options();
    assert_eq!(opts.retry_count, 4);
    assert_eq!(opts.retry_delay, Duration::from_millis(250));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");
    let config = DaybookConfig::load(Some(&path)).unwrap();
    assert_eq!(config.executor.retry_count, 2);
}

#[test]
fn invalid_retry_settings_are_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("daybook.toml");
    std::fs::write(
        &path,
        r#"
[executor]
retry_count = 3
retry_delay_ms = 0
"#,
    )
    .unwrap();

    assert!(DaybookConfig::load(Some(&path)).is_err());
}

#[test]
fn storage_path_resolves_to_configured_value() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("daybook.toml");
    std::fs::write(&path, "[storage]\npath = \"/srv/daybook\"\n").unwrap();

    let config = DaybookConfig::load(Some(&path)).unwrap();
    assert_eq!(
        config.storage.resolved_path(),
        std::path::PathBuf::from("/srv/daybook")
    );
}
