//! AutosizeApp struct definition and constructor.

use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;

use winit::window::Window;

use autosize_common::Size;
use autosize_config::AutosizeConfig;
use autosize_webview::{AutoHeightWebView, WebViewSource};

use crate::props::PropOverrides;

/// Top-level application state.
pub struct AutosizeApp {
    pub(super) config: AutosizeConfig,
    pub(super) overrides: PropOverrides,
    pub(super) source: WebViewSource,
    pub(super) config_path: Option<PathBuf>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) view: Option<AutoHeightWebView>,

    // Sizes delivered by `on_size_updated`
    pub(super) size_tx: mpsc::Sender<Size>,
    pub(super) size_rx: mpsc::Receiver<Size>,

    // Live config reload
    pub(super) config_rx: Option<mpsc::Receiver<AutosizeConfig>>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    // Window height last requested from the platform
    pub(super) requested_height: Option<f64>,

    pub(super) should_exit: bool,
}

impl AutosizeApp {
    pub fn new(
        config: AutosizeConfig,
        overrides: PropOverrides,
        source: WebViewSource,
        config_path: Option<PathBuf>,
    ) -> Self {
        let (size_tx, size_rx) = mpsc::channel();
        Self {
            config,
            overrides,
            source,
            config_path,
            window: None,
            view: None,
            size_tx,
            size_rx,
            config_rx: None,
            tokio_runtime: None,
            requested_height: None,
            should_exit: false,
        }
    }
}
