//! Remote implementations of the core use-case ports.
//!
//! Each use case holds its configured endpoint URL and a shared HTTP
//! client, issues exactly one request per invocation, and applies its own
//! status-code mapping. The mappings are deliberately NOT shared: the API
//! reuses 401/403 with endpoint-specific meanings, so each use case checks
//! its own small set of expected codes and treats everything else as the
//! unexpected error.

mod add_account;
mod authentication;
mod survey_list;

pub use add_account::{DefaultAddAccount, RemoteAddAccount};
pub use authentication::{DefaultAuthentication, RemoteAuthentication};
pub use survey_list::{DefaultSurveyList, RemoteSurveyList};

use crate::error::ApiError;
use opine_core::DomainError;

/// Fold a transport-level failure into the domain taxonomy.
///
/// The domain taxonomy has no transient/retryable category; not getting a
/// response at all is just the unexpected error.
pub(crate) fn map_transport(_err: ApiError) -> DomainError {
    DomainError::Unexpected
}
