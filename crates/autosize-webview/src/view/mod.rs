//! The auto-sizing webview: a wry child view whose bounds follow the
//! rendered size of its document.
//!
//! Handlers installed on the WebView only queue events; [`AutoHeightWebView::poll`]
//! runs on the event-loop thread. Routing to the [`LoadCallbacks`] and the
//! [`SizeController`] lives in `dispatch`; the view pushes the resulting
//! bounds and opacity back into the webview.

mod dispatch;

use std::path::PathBuf;
use std::time::Instant;

use autosize_common::{Rect, Size};
use tracing::warn;
use wry::raw_window_handle;

use crate::content::{ContentProvider, INLINE_DOCUMENT};
use crate::controller::{AutoHeightProps, LoadCallbacks, SizeCallbacks, SizeController};
use crate::events::WebViewEvent;
use crate::manager::{WebViewConfig, WebViewHandle, WebViewManager, WebViewSource};
use crate::script::opacity_script;

use dispatch::route_event;

/// Opacity steps smaller than this are not pushed to the page.
const OPACITY_EPSILON: f64 = 0.01;

/// Everything needed to build an [`AutoHeightWebView`].
pub struct AutoHeightOptions {
    pub source: WebViewSource,
    pub props: AutoHeightProps,
    /// Width the container starts at before the first report.
    pub initial_width: f64,
    /// Top-left corner of the container inside the parent window.
    pub origin: (f64, f64),
    pub devtools: bool,
    pub size_callbacks: SizeCallbacks,
    pub load_callbacks: LoadCallbacks,
}

pub struct AutoHeightWebView {
    manager: WebViewManager,
    handle: WebViewHandle,
    controller: SizeController,
    load_callbacks: LoadCallbacks,
    origin: (f64, f64),
    /// Script baked in as an initialization script at build time.
    baked_script: String,
    applied_size: Option<Size>,
    applied_opacity: Option<f64>,
}

impl AutoHeightWebView {
    /// Build the WebView as a child of `window`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        options: AutoHeightOptions,
    ) -> Result<Self, wry::Error> {
        let AutoHeightOptions {
            source,
            props,
            initial_width,
            origin,
            devtools,
            size_callbacks,
            load_callbacks,
        } = options;

        // The content root is fixed for the life of the view.
        let mut provider = ContentProvider::new(PathBuf::from(&props.base_url));
        let controller = SizeController::new(props, initial_width, size_callbacks);
        let baked_script = controller.script().to_string();

        let source = match source {
            WebViewSource::Html(html) => {
                provider.add_override(INLINE_DOCUMENT, "text/html", html);
                WebViewSource::Url(INLINE_DOCUMENT.to_string())
            }
            url => url,
        };

        let mut manager = WebViewManager::new();
        manager.set_content_provider(provider);

        let config = WebViewConfig {
            source,
            transparent: true,
            devtools,
            initialization_scripts: vec![baked_script.clone()],
            should_start_load: load_callbacks.on_should_start_load_with_request.clone(),
        };

        let bounds = Rect::at(origin.0, origin.1, controller.displayed_size());
        let handle = manager.create(window, bounds, config)?;

        let mut view = Self {
            manager,
            handle,
            controller,
            load_callbacks,
            origin,
            baked_script,
            applied_size: Some(bounds.size()),
            applied_opacity: None,
        };
        view.apply_opacity();
        Ok(view)
    }

    /// Replace the configuration.
    ///
    /// The script is regenerated and re-run on the current page; the
    /// measured size is kept. Nothing pending is drained first.
    pub fn set_props(&mut self, props: AutoHeightProps) {
        if &props == self.controller.props() {
            return;
        }
        self.controller.configure(props);
        if let Err(e) = self.handle.evaluate_script(self.controller.script()) {
            warn!(error = %e, "failed to inject regenerated script");
        }
        self.apply_bounds();
        self.apply_opacity();
    }

    /// Drain queued view events and advance the opacity transition.
    ///
    /// Returns `true` while a transition is running and the caller should
    /// keep polling at frame rate.
    pub fn poll(&mut self, now: Instant) -> bool {
        for event in self.manager.drain_events() {
            self.dispatch(event, now);
        }
        let animating = self.controller.tick(now);
        self.apply_bounds();
        self.apply_opacity();
        animating
    }

    fn dispatch(&mut self, event: WebViewEvent, now: Instant) {
        let routed = route_event(
            &mut self.controller,
            &mut self.load_callbacks,
            &self.baked_script,
            event,
            now,
        );
        if let Some(url) = routed.url {
            self.handle.set_url(url);
        }
        if let Some(title) = routed.title {
            self.handle.set_title(title);
        }
        if routed.reinject_script {
            if let Err(e) = self.handle.evaluate_script(self.controller.script()) {
                warn!(error = %e, "failed to inject measurement script");
            }
        }
        if routed.page_loaded {
            self.applied_opacity = None;
        }
    }

    fn apply_bounds(&mut self) {
        let size = self.controller.displayed_size();
        if self.applied_size == Some(size) {
            return;
        }
        let bounds = Rect::at(self.origin.0, self.origin.1, size);
        match self.handle.set_bounds(bounds) {
            Ok(()) => self.applied_size = Some(size),
            Err(e) => warn!(error = %e, "failed to resize webview"),
        }
    }

    fn apply_opacity(&mut self) {
        let opacity = self.controller.opacity();
        let settled = opacity == 0.0 || opacity == 1.0;
        if let Some(prev) = self.applied_opacity {
            if prev == opacity || (!settled && (prev - opacity).abs() < OPACITY_EPSILON) {
                return;
            }
        }
        match self.handle.evaluate_script(&opacity_script(opacity)) {
            Ok(()) => self.applied_opacity = Some(opacity),
            Err(e) => warn!(error = %e, "failed to set webview opacity"),
        }
    }

    /// Cancel the current load in the embedded view.
    pub fn stop_loading(&self) -> Result<(), wry::Error> {
        self.handle.stop_loading()
    }

    /// Container size currently shown: measurement plus offsets.
    pub fn displayed_size(&self) -> Size {
        self.controller.displayed_size()
    }

    pub fn controller(&self) -> &SizeController {
        &self.controller
    }

    pub fn handle(&self) -> &WebViewHandle {
        &self.handle
    }
}
