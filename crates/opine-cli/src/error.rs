//! CLI-specific error types and mappings.
//!
//! This module provides the error type for the CLI adapter and mappings
//! from domain errors to exit codes and user-facing messages.

use opine_core::DomainError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Domain error surfaced by a use case.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Rejected form input, before any request is sent.
    #[error("Invalid input: {0}")]
    Input(String),

    /// IO error (prompt interrupted, terminal gone).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments/input)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Domain(_) => 1,
            Self::Input(_) => 2,  // EX_USAGE
            Self::Io(_) => 74,    // EX_IOERR
            Self::Config(_) => 78, // EX_CONFIG
        }
    }
}
