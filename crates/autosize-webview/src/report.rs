//! Size reports sent from the embedded document to the host.
//!
//! The wire form is a single short string, `"<width>,<height>"`, carried
//! either in `document.title` or as the text payload of a `size_report`
//! IPC message. Decoding is lenient in the same way the page side is:
//! a component that does not parse becomes `NaN` instead of an error, and
//! the controller decides whether the resulting report is usable.

use autosize_common::Size;

/// IPC message kind used by the measurement script.
pub const SIZE_REPORT_KIND: &str = "size_report";

/// A decoded `(width, height)` pair. Either component may be `NaN`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeReport {
    pub width: f64,
    pub height: f64,
}

impl SizeReport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Decode a `"<width>,<height>"` payload.
    ///
    /// Only the first two comma-separated components are read. Surrounding
    /// whitespace is ignored and an empty component counts as `0`. Missing,
    /// non-numeric, and non-finite components decode to `NaN`.
    pub fn decode(payload: &str) -> Self {
        let mut parts = payload.split(',');
        let width = parse_component(parts.next());
        let height = parse_component(parts.next());
        Self { width, height }
    }

    /// Encode as the wire string.
    pub fn encode(&self) -> String {
        format!("{},{}", self.width, self.height)
    }

    /// Whether the height is usable: non-zero, non-negative, and a number.
    pub fn has_height(&self) -> bool {
        self.height.is_finite() && self.height > 0.0
    }

    /// Whether the width is usable. Zero is a legitimate width.
    pub fn has_width(&self) -> bool {
        self.width.is_finite() && self.width >= 0.0
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

fn parse_component(part: Option<&str>) -> f64 {
    let Some(part) = part else {
        return f64::NAN;
    };
    let trimmed = part.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => f64::NAN,
    }
}
