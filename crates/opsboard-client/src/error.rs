//! Error types for the HTTP client.

use opsboard_core::SourceError;
use thiserror::Error;

/// Errors that can occur when talking to the stats/run endpoints.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level HTTP error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Resource not found (HTTP 404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-success status.
    #[error("unexpected status {status} for {path}")]
    Status { status: u16, path: String },

    /// Endpoint URL could not be built from the base URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Body did not match the expected schema.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl From<ClientError> for SourceError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound(path) => SourceError::NotFound(path),
            ClientError::MalformedResponse(msg) => SourceError::MalformedResponse(msg),
            ClientError::Http(e) if e.is_decode() => SourceError::MalformedResponse(e.to_string()),
            other @ (ClientError::Http(_)
            | ClientError::Status { .. }
            | ClientError::InvalidUrl(_)) => {
                SourceError::Network(other.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_into_source_error_classes() {
        assert_eq!(
            SourceError::from(ClientError::NotFound("/runs/x".into())),
            SourceError::NotFound("/runs/x".into())
        );
        assert!(matches!(
            SourceError::from(ClientError::Status {
                status: 500,
                path: "/stats".into()
            }),
            SourceError::Network(_)
        ));
        assert!(matches!(
            SourceError::from(ClientError::MalformedResponse("missing field".into())),
            SourceError::MalformedResponse(_)
        ));
    }
}
