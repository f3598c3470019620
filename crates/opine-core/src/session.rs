//! Current-session service over the account repository.
//!
//! Pages interact with the stored session only through this service, never
//! through the repository port directly.

use std::sync::Arc;

use crate::domain::AccountModel;
use crate::ports::{AccountRepository, DomainError, DomainResult};

/// Access to the locally persisted session.
pub struct Session {
    repository: Arc<dyn AccountRepository>,
}

impl Session {
    /// Create a session service over the given repository.
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }

    /// Persist `account` as the current account.
    ///
    /// An account with an empty access token or name is never persisted;
    /// such a value can only come from a broken signup/login response and
    /// is reported as [`DomainError::Unexpected`].
    pub async fn update(&self, account: &AccountModel) -> DomainResult<()> {
        if account.access_token.is_empty() || account.name.is_empty() {
            return Err(DomainError::Unexpected);
        }
        self.repository.save(account).await.map_err(|err| {
            tracing::warn!(error = %err, "failed to persist session");
            DomainError::Unexpected
        })
    }

    /// The currently signed-in account, if any.
    pub async fn current(&self) -> DomainResult<Option<AccountModel>> {
        self.repository.load().await.map_err(|err| {
            tracing::warn!(error = %err, "failed to read session");
            DomainError::Unexpected
        })
    }

    /// Forget the current account.
    pub async fn sign_out(&self) -> DomainResult<()> {
        self.repository.clear().await.map_err(|err| {
            tracing::warn!(error = %err, "failed to clear session");
            DomainError::Unexpected
        })
    }
}
