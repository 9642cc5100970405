//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# autosize configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[webview]
# has_iframe = false             # measure body's first child without wrapping
# should_resize_width = false
# custom_style = "p { line-height: 1.5; }"
# custom_script = "console.log('ready');"
# enable_animation = true
# animation_duration_ms = 555    # 0-10000
# height_offset = 12             # 0-1000
# width_offset = 12              # 0-1000
# report_channel = "ipc"         # ipc, title
# base_url = "web/"              # directory for relative sources and files
# devtools = false

# [[webview.files]]
# href = "css/article.css"
# type = "text/css"
# rel = "stylesheet"

[window]
# title = "autosize"
# width = 480                    # 100-8192, initial viewport width
# height = 120                   # 1-8192, before the first size report
# min_height = 48
# max_height = 2048

[logging]
# level = "info"                 # trace, debug, info, warn, error
"##
}
