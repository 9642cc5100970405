//! Host-side size controller.
//!
//! [`SizeController`] owns the container's dimensions and is driven by two
//! events, [`ControllerEvent::ConfigurationChanged`] and
//! [`ControllerEvent::ReportReceived`], plus [`SizeController::tick`] for
//! the opacity transition. It knows nothing about windows or webviews; the
//! caller feeds it events and applies [`SizeController::displayed_size`] and
//! [`SizeController::opacity`] to whatever view it hosts.
//!
//! ```text
//! Idle ──ConfigurationChanged──▶ ScriptRegenerated
//!   │                                   │
//!   └──────────ReportReceived───────────┴──▶ (evaluate)
//!                                             ├─▶ Unchanged
//!                                             └─▶ Updating ──▶ Settled
//! ```

mod animation;
mod props;

#[cfg(test)]
mod tests;

use std::time::Instant;

use autosize_common::Size;
use tracing::{debug, trace};

use crate::report::SizeReport;

pub use animation::{AnimationStatus, OpacityAnimation};
pub use props::{
    AutoHeightProps, ErrorCallback, LoadCallbacks, ShouldStartLoad, SizeCallback, SizeCallbacks,
    UrlCallback,
};

/// Inputs to the controller.
#[derive(Debug, Clone)]
pub enum ControllerEvent {
    ConfigurationChanged(AutoHeightProps),
    /// Raw channel payload, expected as `"<width>,<height>"`.
    ReportReceived(String),
}

/// Where the controller is in its per-report cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Initial size, no configuration change or report seen yet.
    Idle,
    /// The script was rebuilt; measured size untouched.
    ScriptRegenerated,
    /// The last report was ignored and nothing is pending.
    Unchanged,
    /// New dimensions applied; waiting for the opacity transition.
    Updating,
    /// The last accepted report has been delivered to listeners.
    Settled,
}

pub struct SizeController {
    props: AutoHeightProps,
    initial_width: f64,
    script: String,
    container: Size,
    opacity: OpacityAnimation,
    /// Size delivered to listeners once the running transition completes.
    pending: Option<Size>,
    phase: Phase,
    callbacks: SizeCallbacks,
}

impl SizeController {
    /// Create a controller whose container starts at
    /// `{ width: initial_width, height: 0 }`.
    pub fn new(props: AutoHeightProps, initial_width: f64, callbacks: SizeCallbacks) -> Self {
        let script = props.script_template(initial_width).render();
        let opacity = if props.enable_animation {
            OpacityAnimation::transparent()
        } else {
            OpacityAnimation::opaque()
        };
        Self {
            props,
            initial_width,
            script,
            container: Size::new(initial_width, 0.0),
            opacity,
            pending: None,
            phase: Phase::Idle,
            callbacks,
        }
    }

    /// Feed one event. Returns the phase reached.
    pub fn handle(&mut self, event: ControllerEvent, now: Instant) -> Phase {
        match event {
            ControllerEvent::ConfigurationChanged(props) => self.configure(props),
            ControllerEvent::ReportReceived(payload) => self.receive_report(&payload, now),
        }
    }

    /// Replace the configuration and rebuild the script wholesale.
    ///
    /// Measured size, pending delivery, and any running transition are left
    /// as they are.
    pub fn configure(&mut self, props: AutoHeightProps) -> Phase {
        self.script = props.script_template(self.initial_width).render();
        self.props = props;
        self.phase = Phase::ScriptRegenerated;
        debug!(
            has_iframe = self.props.has_iframe,
            enable_animation = self.props.enable_animation,
            script_len = self.script.len(),
            "measurement script regenerated"
        );
        self.phase
    }

    /// Decode and evaluate a size report.
    ///
    /// An ignored report returns [`Phase::Unchanged`] but does not leave
    /// [`Phase::Updating`] while a delivery is still pending.
    pub fn receive_report(&mut self, payload: &str, now: Instant) -> Phase {
        let report = SizeReport::decode(payload);

        if !report.has_height() || !report.has_width() {
            trace!(payload, "size report ignored: unusable payload");
            return self.ignore_report();
        }
        if report.height == self.container.height {
            trace!(height = report.height, "size report ignored: height unchanged");
            return self.ignore_report();
        }

        let size = report.size();
        debug!(width = size.width, height = size.height, "size report accepted");

        if self.props.enable_animation {
            if self.opacity.reset() {
                // The stopped transition still completes for its own size.
                if let Some(previous) = self.pending.take() {
                    self.notify(previous);
                }
            }
            self.container = size;
            self.pending = Some(size);
            self.opacity.start(now, self.props.animation_duration);
            self.phase = Phase::Updating;
        } else {
            self.container = size;
            self.notify(size);
            self.phase = Phase::Settled;
        }
        self.phase
    }

    fn ignore_report(&mut self) -> Phase {
        if self.pending.is_none() {
            self.phase = Phase::Unchanged;
        }
        Phase::Unchanged
    }

    /// Advance the opacity transition; delivers the pending size when it
    /// completes. Returns `true` while a transition is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.props.enable_animation {
            // Animation switched off mid-transition: deliver immediately.
            if let Some(size) = self.pending.take() {
                self.opacity = OpacityAnimation::opaque();
                self.notify(size);
                self.phase = Phase::Settled;
            }
            return false;
        }

        match self.opacity.tick(now) {
            AnimationStatus::Running => true,
            AnimationStatus::Finished => {
                if let Some(size) = self.pending.take() {
                    self.notify(size);
                    self.phase = Phase::Settled;
                }
                false
            }
            AnimationStatus::Idle => false,
        }
    }

    fn notify(&mut self, size: Size) {
        debug!(width = size.width, height = size.height, "size updated");
        if let Some(cb) = self.callbacks.on_size_updated.as_mut() {
            cb(size, &self.props);
        }
    }

    /// Last accepted measurement, without offsets.
    pub fn container(&self) -> Size {
        self.container
    }

    /// Container size to display: measurement plus offsets.
    pub fn displayed_size(&self) -> Size {
        self.container
            .padded(self.props.width_offset, self.props.height_offset)
    }

    /// Current container opacity; always `1.0` with animation disabled.
    pub fn opacity(&self) -> f64 {
        if self.props.enable_animation {
            self.opacity.value()
        } else {
            1.0
        }
    }

    pub fn is_animating(&self) -> bool {
        self.props.enable_animation && self.opacity.is_running()
    }

    /// The measurement program for the current configuration.
    pub fn script(&self) -> &str {
        &self.script
    }

    pub fn props(&self) -> &AutoHeightProps {
        &self.props
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}
