use autosize_common::Rect;
use wry::WebView;

use crate::script::STOP_LOADING_SCRIPT;

/// Convert a logical-pixel `Rect` to a wry `Rect`.
pub fn to_wry_rect(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}

/// Handle to a managed WebView instance: script evaluation, bounds, and
/// the URL and title last seen from the page.
pub struct WebViewHandle {
    /// The underlying wry WebView.
    pub(super) webview: WebView,
    /// Current URL (best-effort tracking).
    pub(super) current_url: String,
    /// Current title.
    pub(super) current_title: String,
}

impl WebViewHandle {
    /// Get the current URL.
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Get the current title.
    pub fn current_title(&self) -> &str {
        &self.current_title
    }

    /// Cancel any in-progress load.
    pub fn stop_loading(&self) -> Result<(), wry::Error> {
        self.webview.evaluate_script(STOP_LOADING_SCRIPT)
    }

    /// Execute JavaScript in the WebView context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(to_wry_rect(&bounds))
    }

    /// Update the tracked URL.
    pub fn set_url(&mut self, url: String) {
        self.current_url = url;
    }

    /// Update the tracked title.
    pub fn set_title(&mut self, title: String) {
        self.current_title = title;
    }
}
