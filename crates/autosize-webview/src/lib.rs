//! Auto-sizing WebView for embedding HTML documents.
//!
//! Wraps the `wry` crate to provide:
//! - A measurement script that reports the document's rendered size
//! - A host-side controller that resizes the container, with an optional
//!   opacity fade-in
//! - A custom protocol for serving the document's linked files
//! - Passthrough of load lifecycle events

pub mod content;
pub mod controller;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod report;
pub mod script;
pub mod view;

pub use content::ContentProvider;
pub use controller::{
    AutoHeightProps, ControllerEvent, LoadCallbacks, Phase, SizeCallbacks, SizeController,
};
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{IpcMessage, IpcPayload};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager, WebViewSource};
pub use report::SizeReport;
pub use script::ScriptTemplate;
pub use view::{AutoHeightOptions, AutoHeightWebView};
