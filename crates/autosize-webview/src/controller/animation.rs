//! Opacity fade-in driven by explicit timestamps.

use std::time::{Duration, Instant};

/// Result of advancing an [`OpacityAnimation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStatus {
    Idle,
    Running,
    /// The transition reached `1.0` on this tick.
    Finished,
}

/// An opacity value animated from 0 to 1.
///
/// There is no cancel: [`reset`](Self::reset) snaps the value back to 0 and
/// drops any running transition, which is the only way one ends early.
#[derive(Debug, Clone)]
pub struct OpacityAnimation {
    value: f64,
    running: Option<(Instant, Duration)>,
}

impl OpacityAnimation {
    /// A settled, fully opaque value.
    pub fn opaque() -> Self {
        Self {
            value: 1.0,
            running: None,
        }
    }

    /// A transparent value waiting for its first transition.
    pub fn transparent() -> Self {
        Self {
            value: 0.0,
            running: None,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Snap to 0. Returns `true` if a running transition was interrupted.
    pub fn reset(&mut self) -> bool {
        self.value = 0.0;
        self.running.take().is_some()
    }

    /// Begin animating toward 1 from the current value.
    pub fn start(&mut self, now: Instant, duration: Duration) {
        self.running = Some((now, duration));
    }

    /// Advance to `now`.
    pub fn tick(&mut self, now: Instant) -> AnimationStatus {
        let Some((started, duration)) = self.running else {
            return AnimationStatus::Idle;
        };

        let elapsed = now.saturating_duration_since(started);
        if elapsed >= duration {
            self.value = 1.0;
            self.running = None;
            return AnimationStatus::Finished;
        }

        let t = elapsed.as_secs_f64() / duration.as_secs_f64();
        self.value = ease_in_out(t);
        AnimationStatus::Running
    }
}

fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
