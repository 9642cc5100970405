//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop: one window hosting one auto-sizing webview, with the config
//! file watched for live changes.

mod core;
mod event_handler;
mod init;
mod polling;
mod reload;
mod shutdown;
mod title;
mod types;

pub use core::AutosizeApp;
