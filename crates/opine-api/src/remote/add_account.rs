//! Remote implementation of the signup use case.

use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use opine_core::{AccountModel, AddAccount, AddAccountParams, DomainError, DomainResult};

use super::map_transport;
use crate::http::{HttpClient, ReqwestClient};
use crate::models::decode_account;

/// Production signup use case over the reqwest adapter.
pub type DefaultAddAccount = RemoteAddAccount<ReqwestClient>;

/// Signup against a fixed endpoint.
pub struct RemoteAddAccount<C: HttpClient> {
    url: Url,
    http_client: Arc<C>,
}

impl<C: HttpClient> RemoteAddAccount<C> {
    /// Create the use case for the given endpoint.
    pub const fn new(url: Url, http_client: Arc<C>) -> Self {
        Self { url, http_client }
    }
}

#[async_trait]
impl<C: HttpClient> AddAccount for RemoteAddAccount<C> {
    async fn add(&self, params: &AddAccountParams) -> DomainResult<AccountModel> {
        let body = serde_json::to_value(params).map_err(|_| DomainError::Unexpected)?;
        let response = self
            .http_client
            .post(&self.url, Some(&body))
            .await
            .map_err(map_transport)?;

        // Signup-specific mapping: here 403 means the address is taken,
        // unlike the survey-list endpoint where it revokes the session.
        match response.status {
            200 => decode_account(response.body),
            403 => Err(DomainError::EmailInUse),
            _ => Err(DomainError::Unexpected),
        }
    }
}
