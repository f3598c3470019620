//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. All concrete implementations are instantiated here:
//! the reqwest HTTP client, the file-backed account repository, the three
//! remote use cases, and the authorizing decorator the survey list goes
//! through.
//!
//! Command handlers receive the fully-composed context and delegate work
//! to the port traits; nothing outside this module names a concrete
//! adapter type.

use std::sync::Arc;

use opine_api::{
    ApiConfig, AuthorizedHttpClient, RemoteAddAccount, RemoteAuthentication, RemoteSurveyList,
    ReqwestClient,
};
use opine_cache::FileAccountRepository;
use opine_core::{AccountRepository, AddAccount, Authentication, LoadSurveyList, Session};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// API base URL override; the client default applies when `None`.
    pub api_url: Option<String>,
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Access to the stored session.
    pub session: Session,
    /// Login use case.
    pub authentication: Arc<dyn Authentication>,
    /// Signup use case.
    pub add_account: Arc<dyn AddAccount>,
    /// Survey-list use case, wired through the authorizing decorator.
    pub survey_list: Arc<dyn LoadSurveyList>,
}

/// Bootstrap the CLI application.
///
/// Composes the API endpoints (`/login`, `/signup`, `/surveys` under the
/// configured base URL), the shared HTTP client, and the session storage.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let mut api_config = ApiConfig::new();
    if let Some(url) = &config.api_url {
        api_config = api_config.with_base_url(url.clone());
    }

    let config_err = |err: opine_api::ApiError| CliError::Config(err.to_string());
    let login_url = api_config.endpoint("login").map_err(config_err)?;
    let signup_url = api_config.endpoint("signup").map_err(config_err)?;
    let surveys_url = api_config.endpoint("surveys").map_err(config_err)?;
    tracing::debug!(login = %login_url, signup = %signup_url, surveys = %surveys_url, "composed API endpoints");

    let http = Arc::new(ReqwestClient::new(&api_config));
    let accounts: Arc<dyn AccountRepository> = Arc::new(
        FileAccountRepository::from_default_location()
            .map_err(|err| CliError::Config(err.to_string()))?,
    );
    let authorized = Arc::new(AuthorizedHttpClient::new(
        Arc::clone(&http),
        Arc::clone(&accounts),
    ));

    Ok(CliContext {
        session: Session::new(Arc::clone(&accounts)),
        authentication: Arc::new(RemoteAuthentication::new(login_url, Arc::clone(&http))),
        add_account: Arc::new(RemoteAddAccount::new(signup_url, http)),
        survey_list: Arc::new(RemoteSurveyList::new(surveys_url, authorized)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_rejects_invalid_base_url() {
        let config = CliConfig {
            api_url: Some("not a url".to_string()),
        };
        let err = match bootstrap(&config) {
            Ok(_) => panic!("expected bootstrap to fail"),
            Err(err) => err,
        };
        assert!(matches!(err, CliError::Config(_)));
    }
}
