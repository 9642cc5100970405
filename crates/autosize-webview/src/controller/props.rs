use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use autosize_common::{FileLink, ReportChannel, Size};

use crate::script::ScriptTemplate;

/// Configuration surface of an auto-sizing webview.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoHeightProps {
    pub has_iframe: bool,
    /// Carried through to listeners. The controller applies reported width
    /// regardless of this flag.
    pub should_resize_width: bool,
    pub custom_script: Option<String>,
    pub custom_style: Option<String>,
    pub files: Vec<FileLink>,
    pub enable_animation: bool,
    /// Opacity transition length. Only used when animation is enabled.
    pub animation_duration: Duration,
    /// Padding added to the measured height (viewer margins).
    pub height_offset: f64,
    /// Padding added to the measured width.
    pub width_offset: f64,
    pub report_channel: ReportChannel,
    /// Base path that relative sources and `files` resolve against.
    pub base_url: String,
}

impl Default for AutoHeightProps {
    fn default() -> Self {
        Self {
            has_iframe: false,
            should_resize_width: false,
            custom_script: None,
            custom_style: None,
            files: Vec::new(),
            enable_animation: true,
            animation_duration: Duration::from_millis(555),
            height_offset: 12.0,
            width_offset: 12.0,
            report_channel: ReportChannel::Ipc,
            base_url: "web/".into(),
        }
    }
}

impl AutoHeightProps {
    /// The script slots these props select.
    pub fn script_template(&self, initial_width: f64) -> ScriptTemplate {
        ScriptTemplate {
            has_iframe: self.has_iframe,
            channel: self.report_channel,
            initial_width,
            custom_style: self.custom_style.clone(),
            custom_script: self.custom_script.clone(),
            files: self.files.clone(),
        }
    }
}

pub type SizeCallback = Box<dyn FnMut(Size, &AutoHeightProps)>;

/// Size listeners.
///
/// `on_height_updated` and `on_width_updated` are part of the surface but
/// are not invoked; only `on_size_updated` fires.
#[derive(Default)]
pub struct SizeCallbacks {
    pub on_height_updated: Option<SizeCallback>,
    pub on_width_updated: Option<SizeCallback>,
    pub on_size_updated: Option<SizeCallback>,
}

impl SizeCallbacks {
    pub fn on_size_updated(f: impl FnMut(Size, &AutoHeightProps) + 'static) -> Self {
        Self {
            on_size_updated: Some(Box::new(f)),
            ..Default::default()
        }
    }
}

impl fmt::Debug for SizeCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SizeCallbacks")
            .field("on_height_updated", &self.on_height_updated.is_some())
            .field("on_width_updated", &self.on_width_updated.is_some())
            .field("on_size_updated", &self.on_size_updated.is_some())
            .finish()
    }
}

pub type UrlCallback = Box<dyn FnMut(&str)>;
pub type ErrorCallback = Box<dyn FnMut(&str, &str)>;
pub type ShouldStartLoad = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Embedded-content lifecycle hooks, forwarded unmodified.
#[derive(Default)]
pub struct LoadCallbacks {
    /// `(url, description)`
    pub on_error: Option<ErrorCallback>,
    pub on_load: Option<UrlCallback>,
    pub on_load_start: Option<UrlCallback>,
    pub on_load_end: Option<UrlCallback>,
    /// Runs on the webview's navigation thread; `false` blocks the load.
    pub on_should_start_load_with_request: Option<ShouldStartLoad>,
}

impl fmt::Debug for LoadCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadCallbacks")
            .field("on_error", &self.on_error.is_some())
            .field("on_load", &self.on_load.is_some())
            .field("on_load_start", &self.on_load_start.is_some())
            .field("on_load_end", &self.on_load_end.is_some())
            .field(
                "on_should_start_load_with_request",
                &self.on_should_start_load_with_request.is_some(),
            )
            .finish()
    }
}
