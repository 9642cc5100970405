//! Webview section validation: ranges and link descriptor shape.

use std::sync::LazyLock;

use regex::Regex;

use crate::schema::AutosizeConfig;

use super::helpers::{validate_range, validate_range_f64};

static MIME_TYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+/[a-z0-9][a-z0-9.+-]*$").expect("static regex"));

static REL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z-]+( [a-z-]+)*$").expect("static regex"));

/// Validate animation and offset constraints.
pub(crate) fn validate_webview(errors: &mut Vec<String>, config: &AutosizeConfig) {
    let webview = &config.webview;
    validate_range(
        errors,
        "webview.animation_duration_ms",
        webview.animation_duration_ms,
        0,
        10_000,
    );
    validate_range_f64(
        errors,
        "webview.height_offset",
        webview.height_offset,
        0.0,
        1000.0,
    );
    validate_range_f64(
        errors,
        "webview.width_offset",
        webview.width_offset,
        0.0,
        1000.0,
    );
    if webview.base_url.trim().is_empty() {
        errors.push("webview.base_url must not be empty".into());
    }
}

/// Validate `<link>` descriptors.
pub(crate) fn validate_files(errors: &mut Vec<String>, config: &AutosizeConfig) {
    for (i, file) in config.webview.files.iter().enumerate() {
        if file.href.trim().is_empty() {
            errors.push(format!("webview.files[{i}].href must not be empty"));
        }
        if !MIME_TYPE_RE.is_match(&file.link_type) {
            errors.push(format!(
                "webview.files[{i}].type = {:?} is not a MIME type",
                file.link_type
            ));
        }
        if !REL_RE.is_match(&file.rel) {
            errors.push(format!(
                "webview.files[{i}].rel = {:?} is not a link relation",
                file.rel
            ));
        }
    }
}
