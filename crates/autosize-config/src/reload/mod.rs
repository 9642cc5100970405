//! Live config reload manager.
//!
//! Combines the file watcher with config loading so that every saved
//! change that still validates is published to the application.

mod manager;

#[cfg(test)]
mod tests;

pub use manager::ReloadManager;
