//! Mapping from config and command line to webview props.

use std::time::Duration;

use autosize_config::schema::WebviewConfig;
use autosize_webview::{AutoHeightProps, WebViewSource};

/// Shown when no source is given.
pub const SAMPLE_DOCUMENT: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>autosize</title></head>
<body>
  <h1>autosize</h1>
  <p>This window follows the height of its content.</p>
  <p><button onclick="addParagraph()">Add a paragraph</button></p>
  <script>
    function addParagraph() {
      var p = document.createElement('p');
      p.textContent = 'Added at ' + new Date().toLocaleTimeString();
      (document.getElementById('height-wrapper') || document.body).appendChild(p);
    }
  </script>
</body>
</html>
"#;

/// Command-line switches that override the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropOverrides {
    pub iframe: bool,
    pub no_animation: bool,
}

pub fn props_from_config(config: &WebviewConfig, overrides: PropOverrides) -> AutoHeightProps {
    AutoHeightProps {
        has_iframe: config.has_iframe || overrides.iframe,
        should_resize_width: config.should_resize_width,
        custom_script: config.custom_script.clone(),
        custom_style: config.custom_style.clone(),
        files: config.files.clone(),
        enable_animation: config.enable_animation && !overrides.no_animation,
        animation_duration: Duration::from_millis(config.animation_duration_ms),
        height_offset: config.height_offset,
        width_offset: config.width_offset,
        report_channel: config.report_channel,
        base_url: config.base_url.clone(),
    }
}

/// Interpret the positional source argument.
pub fn resolve_source(arg: Option<&str>) -> WebViewSource {
    match arg.map(str::trim) {
        None | Some("") => WebViewSource::Html(SAMPLE_DOCUMENT.to_string()),
        Some(html) if html.starts_with('<') => WebViewSource::Html(html.to_string()),
        Some(url) => WebViewSource::Url(url.to_string()),
    }
}
