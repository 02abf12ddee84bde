//! Error types for `Duopane` configuration
//!
//! Split view transitions cannot fail; errors only arise when reading or
//! writing persisted settings.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or saving settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration directory could be determined
    #[error("Configuration directory not available")]
    NoConfigDir,

    /// Reading or writing a settings file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The file or directory involved
        path: PathBuf,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for the expected schema
    #[error("Failed to parse {path}: {source}")]
    Parse {
        /// The file that failed to parse
        path: PathBuf,
        /// The underlying error
        #[source]
        source: toml::de::Error,
    },

    /// Settings could not be serialized
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
