//! Core domain errors.

use thiserror::Error;

/// Core domain errors for opsboard.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Two workers of the same run share an id.
    #[error("Duplicate worker id '{worker}' in run '{run}'")]
    DuplicateWorkerId { run: String, worker: String },
}

/// Failure reported by a stats or run source.
///
/// This is the only error shape that reaches the poller; transports map
/// their own errors into one of these three classes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Transport-level failure (connection refused, timeout, 5xx).
    #[error("network failure: {0}")]
    Network(String),

    /// The requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The response did not match the JSON contract.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl SourceError {
    /// Returns true for the NotFound class.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Short machine-readable class name, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::NotFound(_) => "not_found",
            Self::MalformedResponse(_) => "malformed_response",
        }
    }
}
