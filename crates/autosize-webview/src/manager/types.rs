use crate::controller::ShouldStartLoad;

/// What the WebView initially loads.
#[derive(Debug, Clone, PartialEq)]
pub enum WebViewSource {
    /// Absolute URL, or a path relative to the content base directory.
    Url(String),
    /// Inline HTML, served from the content base so relative links resolve.
    Html(String),
}

/// Configuration for creating a new WebView instance.
#[derive(Clone)]
pub struct WebViewConfig {
    pub source: WebViewSource,
    /// Whether the WebView background should be transparent.
    pub transparent: bool,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Scripts run at document creation, in order.
    pub initialization_scripts: Vec<String>,
    /// Consulted before each navigation; `false` blocks it.
    pub should_start_load: Option<ShouldStartLoad>,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            source: WebViewSource::Html("<html><body></body></html>".to_string()),
            transparent: true,
            devtools: cfg!(debug_assertions),
            initialization_scripts: Vec::new(),
            should_start_load: None,
        }
    }
}

impl std::fmt::Debug for WebViewConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebViewConfig")
            .field("source", &self.source)
            .field("transparent", &self.transparent)
            .field("devtools", &self.devtools)
            .field("initialization_scripts", &self.initialization_scripts.len())
            .field("should_start_load", &self.should_start_load.is_some())
            .finish()
    }
}
