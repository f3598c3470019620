//! Account repository trait definition.
//!
//! This port defines the interface for persisting the current account
//! between invocations. Implementations handle all storage details
//! internally.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::AccountModel;

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Underlying storage failed (I/O, serialization).
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Repository for the current account.
///
/// # Design Rules
///
/// - No filesystem types in signatures
/// - Works with the domain `AccountModel` directly
/// - Implementation handles serialization internally
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Persist `account` as the current account, replacing any previous one.
    async fn save(&self, account: &AccountModel) -> Result<(), RepositoryError>;

    /// Load the current account, or `None` when no account is stored.
    async fn load(&self) -> Result<Option<AccountModel>, RepositoryError>;

    /// Forget the current account. Clearing an empty store is not an error.
    async fn clear(&self) -> Result<(), RepositoryError>;
}
