//! Logging errors

use thiserror::Error;

/// Result type for logger setup.
pub type LogResult<T> = Result<T, LogError>;

/// Errors raised while installing a subscriber.
#[derive(Debug, Error)]
pub enum LogError {
    /// The level string is not a valid filter directive.
    #[error("invalid filter directive {directive:?}: {reason}")]
    Filter { directive: String, reason: String },

    /// A global subscriber is already installed.
    #[error("failed to install subscriber: {0}")]
    Init(String),
}
