//! Auto-sizing webview settings.

use autosize_common::{FileLink, ReportChannel};
use serde::{Deserialize, Serialize};

/// Settings for the embedded view and its size controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebviewConfig {
    /// Measure the body's first child directly instead of wrapping the
    /// document in a measurement container.
    pub has_iframe: bool,
    pub should_resize_width: bool,
    /// Extra script appended after the measurement script.
    pub custom_script: Option<String>,
    /// Extra CSS injected into the document head.
    pub custom_style: Option<String>,
    /// `<link>` elements injected into the document head.
    pub files: Vec<FileLink>,
    pub enable_animation: bool,
    /// Opacity fade-in length in milliseconds (valid range: 0-10000).
    pub animation_duration_ms: u64,
    /// Extra height added to the measured content (valid range: 0-1000).
    pub height_offset: f64,
    /// Extra width added to the measured content (valid range: 0-1000).
    pub width_offset: f64,
    pub report_channel: ReportChannel,
    /// Directory relative sources and file links resolve against.
    pub base_url: String,
    pub devtools: bool,
}

impl Default for WebviewConfig {
    fn default() -> Self {
        Self {
            has_iframe: false,
            should_resize_width: false,
            custom_script: None,
            custom_style: None,
            files: Vec::new(),
            enable_animation: true,
            animation_duration_ms: 555,
            height_offset: 12.0,
            width_offset: 12.0,
            report_channel: ReportChannel::Ipc,
            base_url: "web/".into(),
            devtools: false,
        }
    }
}
