//! Internal error types for API operations.
//!
//! These errors are internal to `opine-api` and are mapped to domain errors
//! at the use-case boundary; callers of the port traits never see them.

use thiserror::Error;

/// Result type alias for HTTP-client operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors raised below the status-mapping layer.
///
/// Note that a non-2xx response is NOT an error here: the HTTP-client port
/// surfaces every received status so the use cases can map it. Only failing
/// to obtain a response at all ends up in this enum.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request could not be completed at the transport level.
    #[error("Connection failed: {message}")]
    Connection {
        /// Description of the transport failure.
        message: String,
    },

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error_message() {
        let error = ApiError::Connection {
            message: "connection refused".to_string(),
        };
        assert!(error.to_string().contains("connection refused"));
    }

    #[test]
    fn test_invalid_url_error_message() {
        let error: ApiError = url::Url::parse("not a url").unwrap_err().into();
        assert!(error.to_string().starts_with("Invalid URL"));
    }
}
