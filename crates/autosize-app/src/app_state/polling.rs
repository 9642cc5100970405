//! Polling of the webview, config reloads, and delivered sizes.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::AutosizeApp;
use super::types::{IDLE_POLL_INTERVAL, POLL_INTERVAL};

impl AutosizeApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        self.poll_config_reload();

        let animating = match self.view.as_mut() {
            Some(view) => view.poll(now),
            None => false,
        };

        self.poll_size_updates();
        self.sync_window_height();
        self.update_window_title();

        let interval = if animating {
            POLL_INTERVAL
        } else {
            IDLE_POLL_INTERVAL
        };
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + interval));
    }

    /// Drain sizes delivered to `on_size_updated`.
    fn poll_size_updates(&mut self) {
        while let Ok(size) = self.size_rx.try_recv() {
            tracing::info!(width = size.width, height = size.height, "content size updated");
        }
    }

    /// Make the window as tall as the displayed container.
    fn sync_window_height(&mut self) {
        let (Some(window), Some(view)) = (self.window.as_ref(), self.view.as_ref()) else {
            return;
        };

        let height = self.config.window.clamp_height(view.displayed_size().height);
        if self.requested_height == Some(height) {
            return;
        }
        self.requested_height = Some(height);

        let width = f64::from(self.config.window.width);
        let _ = window.request_inner_size(winit::dpi::LogicalSize::new(width, height));
        tracing::debug!(height, "window height requested");
    }
}
