//! Autosize configuration system.
//!
//! Provides TOML-based configuration with live reload and full
//! validation. All config sections use sensible defaults so partial
//! configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use autosize_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

pub use reload::ReloadManager;
pub use schema::{AutosizeConfig, CONFIG_SCHEMA_VERSION};
pub use watcher::ConfigWatcher;

use std::path::Path;

use autosize_common::ConfigError;

/// Load and validate config.
///
/// With no explicit path, `config.toml` is read from the OS config
/// directory and created with defaults if it does not exist. An explicit
/// path must exist.
pub fn load_config(path: Option<&Path>) -> Result<AutosizeConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &AutosizeConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = AutosizeConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"webview\""));
        assert!(json.contains("\"window\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"report_channel\": \"ipc\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[webview]\nanimation_duration_ms = 999999\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_with_explicit_missing_path_fails() {
        let err = load_config(Some(Path::new("/nonexistent/autosize/config.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = AutosizeConfig::default();
        let json = config_to_json(&config);
        let parsed: AutosizeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
