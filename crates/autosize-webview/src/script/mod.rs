//! Measurement script generation.
//!
//! [`ScriptTemplate`] is the value object behind the injected program. Each
//! configurable behavior is an enumerated slot; [`ScriptTemplate::render`]
//! assembles fixed fragments around those slots. A template is never patched
//! in place: a configuration change builds a new one.

mod fragments;
mod head;


use autosize_common::{FileLink, ReportChannel};

pub(crate) use head::js_string;

/// Slots that shape the injected measurement program.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptTemplate {
    /// Content is already isolated in an iframe: measure the body's first
    /// element directly instead of wrapping the body's children.
    pub has_iframe: bool,
    /// How size reports leave the page.
    pub channel: ReportChannel,
    /// Width the page-side state starts from.
    pub initial_width: f64,
    /// Extra CSS appended to `document.head`.
    pub custom_style: Option<String>,
    /// Extra JavaScript appended verbatim after the program.
    pub custom_script: Option<String>,
    /// `<link>` descriptors appended to `document.head`.
    pub files: Vec<FileLink>,
}

impl ScriptTemplate {
    pub fn new(initial_width: f64) -> Self {
        Self {
            has_iframe: false,
            channel: ReportChannel::default(),
            initial_width,
            custom_style: None,
            custom_script: None,
            files: Vec::new(),
        }
    }

    /// Render the full program text.
    pub fn render(&self) -> String {
        let mut js = String::with_capacity(4096);

        js.push_str(fragments::PRELUDE);
        js.push_str(&format!(
            "    var width = {};\n    var height = 0;\n",
            js_number(self.initial_width)
        ));

        js.push_str(if self.has_iframe {
            fragments::KEEP_BODY
        } else {
            fragments::WRAP_BODY
        });

        js.push_str(match self.channel {
            ReportChannel::Ipc => fragments::REPORT_VIA_IPC,
            ReportChannel::Title => fragments::REPORT_VIA_TITLE,
        });

        js.push_str(fragments::UPDATE_SIZE);
        js.push_str(fragments::CLEAR_HEAD);

        let mut styles = vec![fragments::BASE_STYLE];
        if let Some(style) = non_empty(&self.custom_style) {
            styles.push(style);
        }
        js.push_str(&head::inject_head_fn(&styles, &self.files));

        js.push_str(fragments::TRIGGERS);

        if let Some(custom) = non_empty(&self.custom_script) {
            js.push('\n');
            js.push_str(custom);
            js.push('\n');
        }

        js
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

fn js_number(value: f64) -> String {
    if value.is_finite() {
        format!("{}", value.round())
    } else {
        "0".to_string()
    }
}

/// JavaScript that sets the opacity of the document root.
pub fn opacity_script(opacity: f64) -> String {
    format!(
        "document.documentElement && (document.documentElement.style.opacity = '{:.3}');",
        opacity.clamp(0.0, 1.0)
    )
}

/// JavaScript that cancels any in-progress load.
pub const STOP_LOADING_SCRIPT: &str = "window.stop();";
