//! Modifier Studio Library
//!
//! This library provides the core functionality of Modifier Studio: the
//! element and modifier chain model, the editing protocol over immutable
//! snapshots, the built-in template catalog, and the terminal UI.

// Module declarations
pub mod config;
pub mod constants;
pub mod editor;
pub mod models;
pub mod tui;
