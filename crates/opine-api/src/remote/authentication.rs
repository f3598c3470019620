//! Remote implementation of the login use case.

use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use opine_core::{AccountModel, Authentication, AuthenticationParams, DomainError, DomainResult};

use super::map_transport;
use crate::http::{HttpClient, ReqwestClient};
use crate::models::decode_account;

/// Production login use case over the reqwest adapter.
pub type DefaultAuthentication = RemoteAuthentication<ReqwestClient>;

/// Login against a fixed endpoint.
///
/// Generic over the HTTP-client port so tests can substitute a fake; wire
/// it with [`ReqwestClient`] in production.
pub struct RemoteAuthentication<C: HttpClient> {
    url: Url,
    http_client: Arc<C>,
}

impl<C: HttpClient> RemoteAuthentication<C> {
    /// Create the use case for the given endpoint.
    pub const fn new(url: Url, http_client: Arc<C>) -> Self {
        Self { url, http_client }
    }
}

#[async_trait]
impl<C: HttpClient> Authentication for RemoteAuthentication<C> {
    async fn auth(&self, params: &AuthenticationParams) -> DomainResult<AccountModel> {
        let body = serde_json::to_value(params).map_err(|_| DomainError::Unexpected)?;
        let response = self
            .http_client
            .post(&self.url, Some(&body))
            .await
            .map_err(map_transport)?;

        // Login-specific mapping: 401 means the credentials were wrong.
        match response.status {
            200 => decode_account(response.body),
            401 => Err(DomainError::InvalidCredentials),
            _ => Err(DomainError::Unexpected),
        }
    }
}
