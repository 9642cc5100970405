//! Host window configuration types.

use serde::{Deserialize, Serialize};

/// Host window settings.
///
/// The window's inner width starts at `width` and is what the measured
/// content is laid out against. Its height follows the displayed container
/// height, clamped to `[min_height, max_height]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial viewport width in logical pixels (valid range: 100-8192).
    pub width: u32,
    /// Height before the first size report (valid range: 1-8192).
    pub height: u32,
    pub min_height: u32,
    pub max_height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "autosize".into(),
            width: 480,
            height: 120,
            min_height: 48,
            max_height: 2048,
        }
    }
}

impl WindowConfig {
    /// Clamp a container height to the configured window bounds.
    pub fn clamp_height(&self, height: f64) -> f64 {
        height.clamp(f64::from(self.min_height), f64::from(self.max_height))
    }
}

// =============================================================================
// Tests
// =============================================================================
