//! Wire-format payloads for the survey-platform API.
//!
//! These structs mirror what the server actually sends and are converted
//! into domain types at the use-case boundary. Conversion is the only place
//! survey dates are parsed, and it only runs once a response status is
//! known to be a success.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use opine_core::{AccountModel, DomainError, DomainResult, SurveyModel};

/// Account payload returned by the login and signup endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RemoteAccount {
    pub access_token: String,
    #[serde(default)]
    pub name: String,
}

impl From<RemoteAccount> for AccountModel {
    fn from(remote: RemoteAccount) -> Self {
        Self {
            access_token: remote.access_token,
            name: remote.name,
        }
    }
}

/// One survey as the list endpoint reports it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RemoteSurveyItem {
    pub id: String,
    pub question: String,
    pub date: String,
    pub did_answer: bool,
}

impl RemoteSurveyItem {
    /// Convert into the domain model, parsing the ISO-8601 date.
    pub(crate) fn into_model(self) -> DomainResult<SurveyModel> {
        let date: DateTime<Utc> = self
            .date
            .parse()
            .map_err(|_| DomainError::MalformedResponse {
                message: format!("invalid survey date '{}'", self.date),
            })?;

        Ok(SurveyModel {
            id: self.id,
            question: self.question,
            date,
            did_answer: self.did_answer,
        })
    }
}

/// Decode a 200 body from the account endpoints.
///
/// A missing or undecodable body on a success status is the generic
/// unexpected error for these endpoints.
pub(crate) fn decode_account(body: Option<Value>) -> DomainResult<AccountModel> {
    let body = body.ok_or(DomainError::Unexpected)?;
    let remote: RemoteAccount =
        serde_json::from_value(body).map_err(|_| DomainError::Unexpected)?;
    Ok(remote.into())
}

/// Decode a 200 body from the survey-list endpoint.
pub(crate) fn decode_survey_list(body: Option<Value>) -> DomainResult<Vec<SurveyModel>> {
    let body = body.ok_or_else(|| DomainError::MalformedResponse {
        message: "missing survey-list body".to_string(),
    })?;
    let items: Vec<RemoteSurveyItem> =
        serde_json::from_value(body).map_err(|err| DomainError::MalformedResponse {
            message: err.to_string(),
        })?;
    items.into_iter().map(RemoteSurveyItem::into_model).collect()
}
