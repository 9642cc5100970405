use std::borrow::Cow;
use std::sync::Arc;

use autosize_common::Rect;
use tracing::{debug, warn};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::content::{self, ContentProvider};
use crate::events::WebViewEvent;
use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::{to_wry_rect, WebViewHandle};
use super::types::{WebViewConfig, WebViewSource};
use super::WebViewManager;

/// Map a source URL to what the WebView should load.
///
/// Absolute URLs pass through; anything else is a path under the content
/// base directory and is served by the custom protocol.
pub fn resolve_source_url(url: &str) -> String {
    if url.contains("://") || url.starts_with("about:") || url.starts_with("data:") {
        url.to_string()
    } else {
        content::asset_url(url)
    }
}

impl WebViewManager {
    /// Create a new WebView as a child of the given window.
    ///
    /// The `window` must implement `raw_window_handle::HasWindowHandle`.
    /// The WebView is positioned at `bounds` within the parent window.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);

        let mut builder = WebViewBuilder::new()
            .with_bounds(to_wry_rect(&bounds))
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_focused(false);

        // IPC bridge first so later scripts can use it
        builder = builder.with_initialization_script(IPC_INIT_SCRIPT);
        for script in &config.initialization_scripts {
            builder = builder.with_initialization_script(script);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&events));
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events));
        builder = Self::attach_title_handler(builder, Arc::clone(&events));
        builder = Self::attach_navigation_handler(
            builder,
            Arc::clone(&events),
            config.should_start_load.clone(),
        );

        builder = self.attach_custom_protocol(builder);

        let initial_url = match &config.source {
            WebViewSource::Url(url) => {
                let resolved = resolve_source_url(url);
                builder = builder.with_url(&resolved);
                resolved
            }
            WebViewSource::Html(html) => {
                builder = builder.with_html(html);
                "about:blank".to_string()
            }
        };

        let webview = builder.build_as_child(window)?;

        debug!(url = %initial_url, "WebView created");

        Ok(WebViewHandle {
            webview,
            current_url: initial_url,
            current_title: String::new(),
        })
    }

    /// Set the content provider for serving assets via `autosize://`.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content_provider = Some(Arc::new(provider));
    }

    fn attach_custom_protocol<'a>(&self, mut builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        if let Some(provider) = &self.content_provider {
            let cp = Arc::clone(provider);
            let events = Arc::clone(&self.events);
            builder = builder.with_custom_protocol(
                content::PROTOCOL.to_string(),
                move |_wv_id, request| {
                    let uri = request.uri().to_string();
                    let path = content::request_path(&uri);

                    let response = match cp.resolve(path) {
                        Some((mime, data)) => wry::http::Response::builder()
                            .status(200)
                            .header("Content-Type", mime.as_ref())
                            .body(Cow::from(data.into_owned())),
                        None => {
                            warn!(path = %path, "custom protocol: asset not found");
                            if let Ok(mut evts) = events.lock() {
                                evts.push(WebViewEvent::LoadError {
                                    url: uri.clone(),
                                    description: "asset not found".to_string(),
                                });
                            }
                            wry::http::Response::builder()
                                .status(404)
                                .body(Cow::from(b"Not Found".to_vec()))
                        }
                    };
                    response.unwrap_or_else(|e| {
                        warn!(error = %e, "custom protocol: failed to build response");
                        wry::http::Response::new(Cow::from(Vec::new()))
                    })
                },
            );
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_pass_through() {
        assert_eq!(resolve_source_url("https://example.com/a"), "https://example.com/a");
        assert_eq!(resolve_source_url("about:blank"), "about:blank");
        assert_eq!(resolve_source_url("data:text/html,<p>x</p>"), "data:text/html,<p>x</p>");
    }

    #[test]
    fn relative_paths_use_custom_protocol() {
        assert_eq!(
            resolve_source_url("article.html"),
            "autosize://localhost/article.html"
        );
        assert_eq!(
            resolve_source_url("/docs/a.html"),
            "autosize://localhost/docs/a.html"
        );
    }
}
