//! `Duopane` Core Library
//!
//! This crate provides the toolkit-independent core of the `Duopane`
//! dual-pane split view: the split state machine, slot binding, divider
//! geometry persistence, change notifications and settings storage.
//!
//! # Crate Structure
//!
//! - [`split`] - Split view state machine, container and slot contracts
//! - [`config`] - Settings types and TOML persistence
//! - [`error`] - Configuration error types
//! - [`tracing`] - Structured logging setup
//! - [`testing`] - Recording doubles for the container and content slots

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod split;
pub mod testing;
pub mod tracing;

pub use config::{AppSettings, ConfigManager, LoggingSettings, SplitViewSettings};
pub use error::{ConfigError, ConfigResult};
pub use split::{
    ContentSlot, DualPaneModel, Location, OpenFlags, PaneSide, SplitContainer, SplitEvent,
    SplitProperty, SplitSnapshot, SplitView,
};
