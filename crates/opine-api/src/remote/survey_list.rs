//! Remote implementation of the survey-list use case.

use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use opine_core::{DomainError, DomainResult, LoadSurveyList, SurveyModel};

use super::map_transport;
use crate::authorized::AuthorizedHttpClient;
use crate::http::{HttpClient, ReqwestClient};
use crate::models::decode_survey_list;

/// Production survey-list use case over the authorized reqwest adapter.
pub type DefaultSurveyList = RemoteSurveyList<AuthorizedHttpClient<ReqwestClient>>;

/// Survey-list loading against a fixed endpoint.
///
/// Credentials are not handled here; wire this with
/// [`AuthorizedHttpClient`] so the stored token rides along on the request.
pub struct RemoteSurveyList<C: HttpClient> {
    url: Url,
    http_client: Arc<C>,
}

impl<C: HttpClient> RemoteSurveyList<C> {
    /// Create the use case for the given endpoint.
    pub const fn new(url: Url, http_client: Arc<C>) -> Self {
        Self { url, http_client }
    }
}

#[async_trait]
impl<C: HttpClient> LoadSurveyList for RemoteSurveyList<C> {
    async fn load_all(&self) -> DomainResult<Vec<SurveyModel>> {
        let response = self
            .http_client
            .get(&self.url, &[])
            .await
            .map_err(map_transport)?;

        // Survey-list mapping: 403 revokes the session, and 204 is a valid
        // empty result. Dates are only parsed once the status is a success.
        match response.status {
            200 => decode_survey_list(response.body),
            204 => Ok(Vec::new()),
            403 => Err(DomainError::AccessDenied),
            _ => Err(DomainError::Unexpected),
        }
    }
}
