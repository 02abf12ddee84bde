//! Tracing integration for structured logging
//!
//! This module wires the `tracing` crate into `Duopane`. Split view
//! transitions are logged as structured events (pane side, divider
//! position, slot id, URI) and written to stderr through an `EnvFilter`.
//!
//! # Filter selection
//!
//! The first directive that parses wins:
//!
//! 1. `RUST_LOG` from the environment
//! 2. the `filter` string from `settings.toml`
//! 3. the level directive, e.g. `duopane=info,duopane_core=info`
//!
//! Rejected directives are reported as warnings once the subscriber is up.

use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Errors that can occur while setting up logging
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TracingError {
    /// A subscriber was already installed
    #[error("Tracing has already been initialized")]
    AlreadyInitialized,

    /// The global subscriber could not be installed
    #[error("Failed to initialize tracing: {0}")]
    InitializationFailed(String),

    /// Level name not recognized
    #[error("Unknown log level: {0}")]
    UnknownLevel(String),

    /// Filter directive could not be parsed
    #[error("Invalid log filter '{directive}': {message}")]
    InvalidFilter {
        /// The rejected directive
        directive: String,
        /// Parser message
        message: String,
    },
}

/// Result type for tracing operations
pub type TracingResult<T> = Result<T, TracingError>;

/// Verbosity used to build the level directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TracingLevel {
    /// Errors only
    Error,
    /// Errors and warnings
    Warn,
    /// Startup and settings messages
    #[default]
    Info,
    /// Split transitions and slot binding
    Debug,
    /// No-op transitions and signal delivery
    Trace,
}

impl TracingLevel {
    /// Every level, quietest first
    pub const ALL: [Self; 5] = [
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
        Self::Trace,
    ];

    /// Name used in directives and settings files
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl FromStr for TracingLevel {
    type Err = TracingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("warning") {
            return Ok(Self::Warn);
        }
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| TracingError::UnknownLevel(name.to_string()))
    }
}

impl std::fmt::Display for TracingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the installed filter came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSource {
    /// `RUST_LOG`
    Environment,
    /// `logging.filter` in the settings file
    Settings,
    /// Built from [`TracingConfig::level`]
    Level,
}

/// A filter picked by [`TracingConfig::resolve_filter`]
#[derive(Debug)]
pub struct ResolvedFilter {
    /// Filter to install
    pub filter: EnvFilter,
    /// Which candidate was used
    pub source: FilterSource,
    /// Candidates that failed to parse, in the order they were tried
    pub rejected: Vec<TracingError>,
}

/// Configuration for tracing initialization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TracingConfig {
    /// Level for the crate directives
    pub level: TracingLevel,
    /// Custom filter string, preferred over `level` when it parses
    pub filter: Option<String>,
}

impl TracingConfig {
    /// Creates a configuration at the default level
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the level
    #[must_use]
    pub fn with_level(mut self, level: TracingLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets a custom filter string
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Filter directive for the configured level.
    ///
    /// Covers both the core library and the GTK front end.
    #[must_use]
    pub fn default_directive(&self) -> String {
        format!("duopane={0},duopane_core={0}", self.level)
    }

    /// Picks the filter to install from `env_directive` (the value of
    /// `RUST_LOG`, if set), the custom filter and the level directive.
    #[must_use]
    pub fn resolve_filter(&self, env_directive: Option<&str>) -> ResolvedFilter {
        let mut rejected = Vec::new();
        let candidates = [
            (FilterSource::Environment, env_directive),
            (FilterSource::Settings, self.filter.as_deref()),
        ];

        for (source, directive) in candidates {
            let Some(directive) = directive.filter(|d| !d.trim().is_empty()) else {
                continue;
            };
            match EnvFilter::try_new(directive) {
                Ok(filter) => {
                    return ResolvedFilter {
                        filter,
                        source,
                        rejected,
                    };
                }
                Err(e) => rejected.push(TracingError::InvalidFilter {
                    directive: directive.to_string(),
                    message: e.to_string(),
                }),
            }
        }

        ResolvedFilter {
            filter: EnvFilter::new(self.default_directive()),
            source: FilterSource::Level,
            rejected,
        }
    }
}

/// Installs the global subscriber, writing to stderr.
///
/// Call once at startup, before the first window is built.
///
/// # Errors
///
/// Returns an error if tracing was already initialized or the subscriber
/// cannot be installed. An unparsable filter is not an error; it is skipped
/// and reported through the new subscriber.
pub fn init_tracing(config: &TracingConfig) -> TracingResult<()> {
    if TRACING_INITIALIZED.swap(true, Ordering::SeqCst) {
        return Err(TracingError::AlreadyInitialized);
    }

    let env_directive = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let resolved = config.resolve_filter(env_directive.as_deref());

    tracing_subscriber::registry()
        .with(resolved.filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| TracingError::InitializationFailed(e.to_string()))?;

    for error in &resolved.rejected {
        tracing::warn!(%error, "Ignoring log filter");
    }
    tracing::debug!(level = %config.level, source = ?resolved.source, "Tracing initialized");

    Ok(())
}

/// Checks if tracing has been initialized
#[must_use]
pub fn is_tracing_initialized() -> bool {
    TRACING_INITIALIZED.load(Ordering::SeqCst)
}
