//! Domain error taxonomy shared by all use cases.

use thiserror::Error;

/// Terminal, user-displayable failures produced by the remote use cases.
///
/// Every non-success outcome of a use case maps to exactly one of these.
/// None of them is retryable; callers display the message (or, for
/// [`DomainError::AccessDenied`], end the current session) and stop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The credentials submitted on login were rejected.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Signup was rejected because the e-mail address is taken.
    #[error("The e-mail address is already in use")]
    EmailInUse,

    /// The stored session is no longer accepted by the server.
    #[error("Access denied")]
    AccessDenied,

    /// Anything the endpoint-specific mappings do not recognize.
    #[error("Something went wrong. Please try again soon")]
    Unexpected,

    /// The server answered with a success status but an undecodable payload.
    #[error("Malformed server response: {message}")]
    MalformedResponse {
        /// What could not be decoded.
        message: String,
    },
}

/// Result type alias for use-case operations.
pub type DomainResult<T> = Result<T, DomainError>;
