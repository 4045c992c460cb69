//! Shared error type across Pulse crates.

use thiserror::Error;

/// Stable error classification (mirrors the invocation contract: every
/// failure is either bad configuration or a failed operation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required configuration is missing or invalid.
    Configuration,
    /// Gathering or publishing failed at runtime.
    Operation,
}

impl ErrorKind {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Configuration => "CONFIGURATION",
            ErrorKind::Operation => "OPERATION",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PulseError>;

/// Unified error type used by core and collector.
#[derive(Debug, Error)]
pub enum PulseError {
    #[error("missing required environment variable: {0}")]
    MissingConfig(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("metric source {metric} failed: {message}")]
    Source { metric: String, message: String },
    #[error("publish failed at batch {batch}: {message}")]
    Publish { batch: usize, message: String },
    #[error("backend error: {0}")]
    Backend(String),
}

impl PulseError {
    /// Map an error to its stable classification.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PulseError::MissingConfig(_) | PulseError::InvalidConfig(_) => {
                ErrorKind::Configuration
            }
            PulseError::Source { .. } | PulseError::Publish { .. } | PulseError::Backend(_) => {
                ErrorKind::Operation
            }
        }
    }
}
