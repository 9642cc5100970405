//! Live config reload: watch the config file on a tokio runtime and apply
//! each validated change to the webview.

use std::sync::mpsc;

use autosize_config::{AutosizeConfig, ReloadManager};

use crate::props::props_from_config;

use super::core::AutosizeApp;

impl AutosizeApp {
    /// Start the background watcher, if there is a config file to watch.
    pub(super) fn start_config_reload(&mut self) {
        let Some(path) = self.config_path.clone() else {
            tracing::debug!("No config path, live reload disabled");
            return;
        };

        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                tracing::warn!("Failed to create tokio runtime, live reload disabled: {e}");
                return;
            }
        };

        let (tx, rx) = mpsc::channel();
        let initial = self.config.clone();
        rt.spawn(async move {
            let mut config_rx = ReloadManager::start(path, initial);
            while config_rx.changed().await.is_ok() {
                let config = config_rx.borrow_and_update().clone();
                if tx.send(config).is_err() {
                    break;
                }
            }
        });

        self.config_rx = Some(rx);
        self.tokio_runtime = Some(rt);
    }

    /// Apply any config published by the reload task (non-blocking).
    pub(super) fn poll_config_reload(&mut self) {
        let Some(rx) = self.config_rx.as_ref() else {
            return;
        };

        let mut latest = None;
        while let Ok(config) = rx.try_recv() {
            latest = Some(config);
        }
        if let Some(config) = latest {
            self.apply_config(config);
        }
    }

    fn apply_config(&mut self, config: AutosizeConfig) {
        tracing::info!("Applying reloaded config");

        if let Some(view) = self.view.as_mut() {
            view.set_props(props_from_config(&config.webview, self.overrides));
        }
        if let Some(window) = self.window.as_ref() {
            window.set_title(&config.window.title);
        }
        if config.window != self.config.window {
            self.requested_height = None;
        }
        self.config = config;
    }
}
