//! Signup port trait.

use async_trait::async_trait;
use serde::Serialize;

use super::error::DomainResult;
use crate::domain::AccountModel;

/// Fields submitted on signup.
///
/// Serializes to the camelCase wire names the API expects, including the
/// repeated password confirmation the server re-validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAccountParams {
    /// Display name for the new account.
    pub name: String,
    /// E-mail address for the new account.
    pub email: String,
    /// Chosen password.
    pub password: String,
    /// Must equal `password`.
    pub password_confirmation: String,
}

/// Port trait for the signup use case.
///
/// The remote implementation lives in `opine-api`. A single invocation
/// issues exactly one request and resolves to the created account or one of
/// the domain errors:
///
/// - [`DomainError::EmailInUse`](super::DomainError::EmailInUse) when the
///   server reports the address is taken
/// - [`DomainError::Unexpected`](super::DomainError::Unexpected) for every
///   other failure
#[async_trait]
pub trait AddAccount: Send + Sync {
    /// Create an account and sign it in.
    async fn add(&self, params: &AddAccountParams) -> DomainResult<AccountModel>;
}
