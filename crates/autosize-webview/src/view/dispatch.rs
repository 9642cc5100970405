//! Routing of queued webview events to the controller and load callbacks.
//!
//! Kept apart from the view so it can run without a window: the view only
//! applies the returned [`Routed`] to its handle.

use std::time::Instant;

use autosize_common::ReportChannel;
use tracing::debug;

use crate::controller::{LoadCallbacks, SizeController};
use crate::events::{PageLoadState, WebViewEvent};
use crate::ipc::IpcMessage;
use crate::report::SIZE_REPORT_KIND;

/// Handle-side effects of one routed event.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct Routed {
    /// URL of a load that just started.
    pub url: Option<String>,
    /// Latest document title.
    pub title: Option<String>,
    /// A document finished loading; opacity must be pushed again.
    pub page_loaded: bool,
    /// The finished document runs a stale script and needs the current one.
    pub reinject_script: bool,
}

pub(crate) fn route_event(
    controller: &mut SizeController,
    callbacks: &mut LoadCallbacks,
    baked_script: &str,
    event: WebViewEvent,
    now: Instant,
) -> Routed {
    let mut routed = Routed::default();
    match event {
        WebViewEvent::PageLoad {
            state: PageLoadState::Started,
            url,
        } => {
            if let Some(cb) = callbacks.on_load_start.as_mut() {
                cb(&url);
            }
            routed.url = Some(url);
        }
        WebViewEvent::PageLoad {
            state: PageLoadState::Finished,
            url,
        } => {
            // New documents run the baked script.
            routed.reinject_script = controller.script() != baked_script;
            routed.page_loaded = true;
            if let Some(cb) = callbacks.on_load.as_mut() {
                cb(&url);
            }
            if let Some(cb) = callbacks.on_load_end.as_mut() {
                cb(&url);
            }
        }
        WebViewEvent::LoadError { url, description } => {
            if let Some(cb) = callbacks.on_error.as_mut() {
                cb(&url, &description);
            }
            if let Some(cb) = callbacks.on_load_end.as_mut() {
                cb(&url);
            }
        }
        WebViewEvent::TitleChanged { title } => {
            if controller.props().report_channel == ReportChannel::Title {
                controller.receive_report(&title, now);
            }
            routed.title = Some(title);
        }
        WebViewEvent::IpcMessage { body } => {
            if controller.props().report_channel == ReportChannel::Ipc {
                route_ipc(controller, &body, now);
            }
        }
        WebViewEvent::NavigationRequested { url } => {
            debug!(url = %url, "navigation");
        }
    }
    routed
}

fn route_ipc(controller: &mut SizeController, body: &str, now: Instant) {
    match IpcMessage::from_json(body) {
        Some(msg) if msg.kind == SIZE_REPORT_KIND => match msg.as_text() {
            Some(payload) => {
                controller.receive_report(payload, now);
            }
            None => debug!("size report without text payload"),
        },
        Some(msg) => debug!(kind = %msg.kind, "IPC message ignored"),
        None => debug!(body_len = body.len(), "IPC message ignored: unparseable"),
    }
}
