//! Tests for the full validation pipeline.

use super::*;
use autosize_common::FileLink;

#[test]
fn default_config_validates() {
    let config = AutosizeConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_animation_duration_too_long() {
    let mut config = AutosizeConfig::default();
    config.webview.animation_duration_ms = 60_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("webview.animation_duration_ms"));
}

#[test]
fn catches_negative_offset() {
    let mut config = AutosizeConfig::default();
    config.webview.height_offset = -1.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("webview.height_offset"));
}

#[test]
fn catches_nan_offset() {
    let mut config = AutosizeConfig::default();
    config.webview.width_offset = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("webview.width_offset"));
}

#[test]
fn catches_empty_base_url() {
    let mut config = AutosizeConfig::default();
    config.webview.base_url = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("webview.base_url"));
}

#[test]
fn stylesheet_links_validate() {
    let mut config = AutosizeConfig::default();
    config.webview.files = vec![
        FileLink::stylesheet("css/article.css"),
        FileLink {
            href: "icon.svg".into(),
            link_type: "image/svg+xml".into(),
            rel: "icon".into(),
        },
    ];
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_malformed_link_descriptors() {
    let mut config = AutosizeConfig::default();
    config.webview.files = vec![FileLink {
        href: "".into(),
        link_type: "css".into(),
        rel: "Style Sheet!".into(),
    }];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("webview.files[0].href"));
    assert!(err.contains("webview.files[0].type"));
    assert!(err.contains("webview.files[0].rel"));
}

#[test]
fn catches_inverted_height_bounds() {
    let mut config = AutosizeConfig::default();
    config.window.min_height = 900;
    config.window.max_height = 300;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.min_height"));
}

#[test]
fn catches_narrow_window() {
    let mut config = AutosizeConfig::default();
    config.window.width = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = AutosizeConfig::default();
    config.webview.animation_duration_ms = 60_000;
    config.window.width = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("webview.animation_duration_ms"));
    assert!(err.contains("window.width"));
    assert!(err.contains("; "));
}
