//! Graceful shutdown: stop the reload task, then drop the webview.

use std::time::Duration;

use super::core::AutosizeApp;

impl AutosizeApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// The reload channel goes first so no config lands on a dropped view.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        self.config_rx = None;
        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }

        self.view = None;
        self.window = None;
        self.should_exit = true;

        tracing::info!("Graceful shutdown complete");
    }
}
