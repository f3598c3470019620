//! Survey-list port trait.

use async_trait::async_trait;

use super::error::DomainResult;
use crate::domain::SurveyModel;

/// Port trait for loading the survey list.
///
/// The remote implementation lives in `opine-api` and is wired through the
/// authorizing HTTP-client decorator, so the caller never handles
/// credentials. Outcomes:
///
/// - the full list on success, empty when the server has nothing to report
/// - [`DomainError::AccessDenied`](super::DomainError::AccessDenied) when
///   the session is not accepted, which callers translate into a sign-out
/// - [`DomainError::MalformedResponse`](super::DomainError::MalformedResponse)
///   when a survey payload cannot be decoded
/// - [`DomainError::Unexpected`](super::DomainError::Unexpected) otherwise
#[async_trait]
pub trait LoadSurveyList: Send + Sync {
    /// Load every survey visible to the current account.
    async fn load_all(&self) -> DomainResult<Vec<SurveyModel>>;
}
