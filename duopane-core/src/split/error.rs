//! Error types for split view operations
//!
//! State transitions of the split view cannot fail; the only recoverable
//! errors come from building values at the edges, such as locations.

/// Errors that can occur while preparing split view input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    /// The location string or path could not be turned into a location.
    #[error("invalid location: {0}")]
    InvalidLocation(String),
}

/// Result type alias for split view operations.
pub type SplitResult<T> = Result<T, SplitError>;
