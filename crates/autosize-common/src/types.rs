use serde::{Deserialize, Serialize};
use std::fmt;

/// A width/height pair in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Grow both dimensions by fixed padding.
    pub fn padded(self, width_offset: f64, height_offset: f64) -> Self {
        Self {
            width: self.width + width_offset,
            height: self.height + height_offset,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// A rect anchored at `(x, y)` with the given size.
    pub fn at(x: f64, y: f64, size: Size) -> Self {
        Self {
            x,
            y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// An external stylesheet or script reference spliced into the document head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileLink {
    pub href: String,
    #[serde(rename = "type")]
    pub link_type: String,
    pub rel: String,
}

impl FileLink {
    pub fn stylesheet(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            link_type: "text/css".into(),
            rel: "stylesheet".into(),
        }
    }
}

/// How the embedded document delivers size reports to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum ReportChannel {
    /// Typed message over the IPC bridge.
    #[default]
    Ipc,
    /// `document.title` plus a bumped location fragment.
    Title,
}
