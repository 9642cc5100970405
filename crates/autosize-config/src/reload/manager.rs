//! Core reload manager implementation.

use crate::schema::AutosizeConfig;
use crate::toml_loader;
use crate::validation;
use crate::watcher::ConfigWatcher;
use autosize_common::ConfigError;
use std::path::{Path, PathBuf};
use tokio::sync::{broadcast, watch};
use tracing::{error, info, warn};

/// Manages live config reloading.
///
/// Watches the config file for changes and publishes new configs
/// via a [`tokio::sync::watch`] channel. Edits that fail to parse or
/// validate are logged and skipped; the previous config stays current.
pub struct ReloadManager {
    config_path: PathBuf,
}

impl ReloadManager {
    /// Start watching `config_path`, seeding the channel with `initial`.
    ///
    /// Must be called from within a tokio runtime. The watcher runs in a
    /// background task until every receiver is dropped.
    pub fn start(config_path: PathBuf, initial: AutosizeConfig) -> watch::Receiver<AutosizeConfig> {
        let (config_tx, config_rx) = watch::channel(initial);

        tokio::spawn(async move {
            let manager = ReloadManager { config_path };
            manager.run_watch_loop(config_tx).await;
        });

        config_rx
    }

    /// Internal watch loop that reloads config on file changes.
    async fn run_watch_loop(&self, config_tx: watch::Sender<AutosizeConfig>) {
        let watcher = match ConfigWatcher::new(self.config_path.clone()) {
            Ok(w) => w,
            Err(e) => {
                error!("failed to create config watcher: {e}");
                return;
            }
        };

        let (change_tx, mut change_rx) = broadcast::channel::<()>(16);

        tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!("config watcher error: {e}");
            }
        });

        loop {
            match change_rx.recv().await {
                Ok(()) => {
                    info!("reloading config from {}", self.config_path.display());
                    match reload_config(&self.config_path) {
                        Ok(config) => {
                            if config_tx.send(config).is_err() {
                                info!("all config receivers dropped, stopping reload manager");
                                break;
                            }
                        }
                        Err(e) => warn!("config reload failed: {e}"),
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("config watcher lagged by {n} events");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("config watcher channel closed");
                    break;
                }
            }
        }
    }
}

/// Reload config from disk and validate it.
pub(crate) fn reload_config(path: &Path) -> Result<AutosizeConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
