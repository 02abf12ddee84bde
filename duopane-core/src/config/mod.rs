//! Configuration management for `Duopane`
//!
//! This module provides the `ConfigManager` for loading and saving
//! configuration files in TOML format, and the settings types stored in
//! them.

mod manager;
pub mod settings;

use serde::{Deserialize, Serialize};

pub use manager::ConfigManager;
pub use settings::SplitViewSettings;

use crate::tracing::{TracingConfig, TracingLevel};

/// Logging preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level name (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Optional `EnvFilter` directive string, overrides `level`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: TracingLevel::default().to_string(),
            filter: None,
        }
    }
}

impl LoggingSettings {
    /// Builds a tracing configuration; unknown level names fall back to
    /// the default level.
    #[must_use]
    pub fn to_tracing_config(&self) -> TracingConfig {
        let level = self.level.parse().unwrap_or_default();
        let config = TracingConfig::new().with_level(level);
        match &self.filter {
            Some(filter) => config.with_filter(filter.clone()),
            None => config,
        }
    }
}

/// Top-level contents of `settings.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Split view preferences and persisted geometry.
    pub split_view: SplitViewSettings,
    /// Logging preferences.
    pub logging: LoggingSettings,
}
