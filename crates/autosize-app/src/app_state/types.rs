//! Internal constants for the app state module.

use std::time::Duration;

/// Poll interval while an opacity transition runs (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// Poll interval otherwise; webview events queue until the next poll.
pub(super) const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(33);
