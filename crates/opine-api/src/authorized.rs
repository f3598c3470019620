//! Token-injecting decorator over the HTTP-client port.
//!
//! Wraps any [`HttpClient`] and, on GET requests, attaches the stored
//! account's access token as a header before delegating. Use cases wired
//! through this decorator never touch storage themselves.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use opine_core::AccountRepository;

use crate::error::ApiResult;
use crate::http::{HttpClient, HttpResponse};

/// Header carrying the access token on authorized requests.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Decorator that authorizes GET requests with the current session.
pub struct AuthorizedHttpClient<C: HttpClient> {
    inner: Arc<C>,
    accounts: Arc<dyn AccountRepository>,
}

impl<C: HttpClient> AuthorizedHttpClient<C> {
    /// Wrap `inner`, reading credentials from `accounts`.
    pub fn new(inner: Arc<C>, accounts: Arc<dyn AccountRepository>) -> Self {
        Self { inner, accounts }
    }
}

#[async_trait]
impl<C: HttpClient> HttpClient for AuthorizedHttpClient<C> {
    async fn get(&self, url: &Url, headers: &[(String, String)]) -> ApiResult<HttpResponse> {
        let mut headers = headers.to_vec();
        // A missing or unreadable session just means an unauthorized
        // request; the endpoint's 403 mapping decides what follows.
        if let Ok(Some(account)) = self.accounts.load().await {
            headers.push((ACCESS_TOKEN_HEADER.to_string(), account.access_token));
        }
        self.inner.get(url, &headers).await
    }

    async fn post(&self, url: &Url, body: Option<&Value>) -> ApiResult<HttpResponse> {
        self.inner.post(url, body).await
    }
}
