//! Tests for the reload manager.

use super::manager::reload_config;
use super::*;
use crate::schema::AutosizeConfig;
use autosize_common::ConfigError;
use std::path::PathBuf;

#[test]
fn reload_rejects_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[window]\nwidth = 5\n").unwrap();

    let err = reload_config(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
}

#[test]
fn reload_reads_current_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[webview]\nhas_iframe = true\n").unwrap();

    let config = reload_config(&path).unwrap();
    assert!(config.webview.has_iframe);
}

#[tokio::test]
async fn start_seeds_the_channel() {
    let path = PathBuf::from("/tmp/nonexistent_autosize_reload_test.toml");
    let mut initial = AutosizeConfig::default();
    initial.window.title = "seeded".into();

    let rx = ReloadManager::start(path, initial);
    assert_eq!(rx.borrow().window.title, "seeded");
}

#[tokio::test]
async fn publishes_valid_edits() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "# empty\n").unwrap();

    let mut rx = ReloadManager::start(path.clone(), AutosizeConfig::default());
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    std::fs::write(&path, "[webview]\nenable_animation = false\n").unwrap();

    let changed = tokio::time::timeout(std::time::Duration::from_secs(5), rx.changed()).await;
    assert!(matches!(changed, Ok(Ok(()))));
    assert!(!rx.borrow().webview.enable_animation);
}
