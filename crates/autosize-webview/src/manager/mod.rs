//! WebView lifecycle management.
//!
//! `WebViewManager` builds one `wry::WebView` and collects the events its
//! handlers emit. Handlers run on webview callbacks and only push into the
//! shared queue; the event loop drains it.

use std::sync::{Arc, Mutex};

use crate::content::ContentProvider;
use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::{WebViewConfig, WebViewSource};

/// Builds a WebView and owns its event queue.
pub struct WebViewManager {
    /// Event sink drained by the main event loop.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    /// Optional content provider for the `autosize://` custom protocol.
    content_provider: Option<Arc<ContentProvider>>,
}

impl WebViewManager {
    /// Create a new WebView manager.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            content_provider: None,
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    #[cfg(test)]
    pub(crate) fn push_event(&self, event: WebViewEvent) {
        if let Ok(mut evts) = self.events.lock() {
            evts.push(event);
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}
