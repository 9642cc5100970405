//! Window creation and webview setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use autosize_common::{AutosizeError, Size};
use autosize_webview::{
    AutoHeightOptions, AutoHeightProps, AutoHeightWebView, LoadCallbacks, SizeCallbacks,
};

use crate::props::props_from_config;

use super::core::AutosizeApp;

impl AutosizeApp {
    /// Create the window and the webview inside it.
    pub(super) fn initialize_window(
        &mut self,
        event_loop: &ActiveEventLoop,
    ) -> autosize_common::Result<()> {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_transparent(true)
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(window_config.width),
                f64::from(window_config.height),
            ));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| AutosizeError::Other(format!("failed to create window: {e}")))?;

        let props = props_from_config(&self.config.webview, self.overrides);
        let base_dir = std::env::current_dir()
            .unwrap_or_default()
            .join(&props.base_url);
        if !base_dir.is_dir() {
            tracing::warn!(
                path = %base_dir.display(),
                "Content directory not found; linked files will not load"
            );
        }

        let options = AutoHeightOptions {
            source: self.source.clone(),
            props,
            initial_width: f64::from(window_config.width),
            origin: (0.0, 0.0),
            devtools: self.config.webview.devtools,
            size_callbacks: self.size_callbacks(),
            load_callbacks: load_callbacks(),
        };

        let view = AutoHeightWebView::create(window.as_ref(), options)
            .map_err(|e| AutosizeError::WebView(e.to_string()))?;

        self.view = Some(view);
        self.window = Some(window);
        tracing::info!("Window and webview created");
        Ok(())
    }

    fn size_callbacks(&self) -> SizeCallbacks {
        let tx = self.size_tx.clone();
        SizeCallbacks::on_size_updated(move |size: Size, _: &AutoHeightProps| {
            let _ = tx.send(size);
        })
    }
}

/// Lifecycle hooks: log what the document does.
fn load_callbacks() -> LoadCallbacks {
    LoadCallbacks {
        on_error: Some(Box::new(|url: &str, description: &str| {
            tracing::warn!(url = %url, "load error: {description}");
        })),
        on_load: Some(Box::new(|url: &str| {
            tracing::info!(url = %url, "document loaded");
        })),
        on_load_start: Some(Box::new(|url: &str| {
            tracing::debug!(url = %url, "load started");
        })),
        on_load_end: Some(Box::new(|url: &str| {
            tracing::debug!(url = %url, "load finished");
        })),
        on_should_start_load_with_request: None,
    }
}
