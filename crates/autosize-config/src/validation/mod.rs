//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod webview;
mod window;

#[cfg(test)]
mod tests;

use crate::schema::AutosizeConfig;
use autosize_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &AutosizeConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    webview::validate_webview(&mut errors, config);
    webview::validate_files(&mut errors, config);
    window::validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
