//! Login command handler.

use anyhow::Result;

use opine_core::AuthenticationParams;

use super::{prompt_password, prompt_text, validate_fields};
use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::validation::{FormInput, make_login_validation};

/// Execute the login command.
///
/// Collects missing credentials interactively, validates the form, then
/// authenticates and persists the session.
pub async fn execute(
    ctx: &CliContext,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let email = match email {
        Some(value) => value,
        None => prompt_text("E-mail")?,
    };
    let password = match password {
        Some(value) => value,
        None => prompt_password("Password")?,
    };

    let mut input = FormInput::new();
    input.insert("email".to_string(), email.clone());
    input.insert("password".to_string(), password.clone());
    validate_fields(&make_login_validation(), &["email", "password"], &input)?;

    let account = ctx
        .authentication
        .auth(&AuthenticationParams { email, password })
        .await
        .map_err(CliError::from)?;
    ctx.session.update(&account).await.map_err(CliError::from)?;

    println!("Signed in as {}.", account.name);
    Ok(())
}
