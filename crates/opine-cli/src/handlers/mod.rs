//! Command handlers.
//!
//! Handlers receive the composed [`CliContext`](crate::bootstrap::CliContext)
//! and delegate to the use-case ports. All terminal I/O (prompts, tables,
//! status lines) happens here; no handler names a concrete adapter type.

pub mod login;
pub mod logout;
pub mod signup;
pub mod surveys;
pub mod whoami;

use dialoguer::{Input, Password};

use crate::error::CliError;
use crate::validation::{FormInput, ValidationComposite};

/// Prompt for a line of text.
pub(crate) fn prompt_text(prompt: &str) -> Result<String, CliError> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|err| CliError::Io(err.to_string()))
}

/// Prompt for a password without echoing it.
pub(crate) fn prompt_password(prompt: &str) -> Result<String, CliError> {
    Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
        .map_err(|err| CliError::Io(err.to_string()))
}

/// Run the form validation over `fields` in order, rejecting on the first
/// error. Validation failures never reach the network.
pub(crate) fn validate_fields(
    validation: &ValidationComposite,
    fields: &[&str],
    input: &FormInput,
) -> Result<(), CliError> {
    for field in fields {
        if let Some(message) = validation.validate(field, input) {
            return Err(CliError::Input(format!("{field}: {message}")));
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Spies and stubs for exercising handlers without a network.

    use std::sync::Arc;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use opine_core::{
        AccountModel, AccountRepository, AddAccount, AddAccountParams, Authentication,
        AuthenticationParams, DomainResult, LoadSurveyList, RepositoryError, Session, SurveyModel,
    };

    use crate::bootstrap::CliContext;

    /// In-memory account repository.
    #[derive(Default)]
    pub(crate) struct MemoryAccounts {
        pub stored: Mutex<Option<AccountModel>>,
    }

    #[async_trait]
    impl AccountRepository for MemoryAccounts {
        async fn save(&self, account: &AccountModel) -> Result<(), RepositoryError> {
            *self.stored.lock().unwrap() = Some(account.clone());
            Ok(())
        }

        async fn load(&self) -> Result<Option<AccountModel>, RepositoryError> {
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn clear(&self) -> Result<(), RepositoryError> {
            *self.stored.lock().unwrap() = None;
            Ok(())
        }
    }

    pub(crate) struct StubAuthentication {
        pub result: DomainResult<AccountModel>,
        pub calls: AtomicUsize,
    }

    #[async_trait]
    impl Authentication for StubAuthentication {
        async fn auth(&self, _params: &AuthenticationParams) -> DomainResult<AccountModel> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    pub(crate) struct StubAddAccount {
        pub result: DomainResult<AccountModel>,
        pub calls: AtomicUsize,
    }

    #[async_trait]
    impl AddAccount for StubAddAccount {
        async fn add(&self, _params: &AddAccountParams) -> DomainResult<AccountModel> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    pub(crate) struct StubSurveyList {
        pub result: DomainResult<Vec<SurveyModel>>,
    }

    #[async_trait]
    impl LoadSurveyList for StubSurveyList {
        async fn load_all(&self) -> DomainResult<Vec<SurveyModel>> {
            self.result.clone()
        }
    }

    pub(crate) fn stub_account() -> AccountModel {
        AccountModel::new("token", "Ana")
    }

    pub(crate) struct TestContext {
        pub ctx: CliContext,
        pub accounts: Arc<MemoryAccounts>,
        pub authentication: Arc<StubAuthentication>,
        pub add_account: Arc<StubAddAccount>,
    }

    pub(crate) fn make_ctx(
        authentication: StubAuthentication,
        add_account: StubAddAccount,
        survey_list: StubSurveyList,
    ) -> TestContext {
        let accounts = Arc::new(MemoryAccounts::default());
        let authentication = Arc::new(authentication);
        let add_account = Arc::new(add_account);
        let ctx = CliContext {
            session: Session::new(Arc::clone(&accounts) as Arc<dyn AccountRepository>),
            authentication: Arc::clone(&authentication) as Arc<dyn Authentication>,
            add_account: Arc::clone(&add_account) as Arc<dyn AddAccount>,
            survey_list: Arc::new(survey_list),
        };
        TestContext {
            ctx,
            accounts,
            authentication,
            add_account,
        }
    }
}
