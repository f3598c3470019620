//! Signup command handler.

use anyhow::Result;

use opine_core::AddAccountParams;

use super::{prompt_password, prompt_text, validate_fields};
use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::validation::{FormInput, make_signup_validation};

/// Execute the signup command.
///
/// Collects missing fields interactively, validates the form (including
/// the password confirmation), then creates the account and persists the
/// session.
pub async fn execute(
    ctx: &CliContext,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    password_confirmation: Option<String>,
) -> Result<()> {
    let name = match name {
        Some(value) => value,
        None => prompt_text("Name")?,
    };
    let email = match email {
        Some(value) => value,
        None => prompt_text("E-mail")?,
    };
    let password = match password {
        Some(value) => value,
        None => prompt_password("Password")?,
    };
    let password_confirmation = match password_confirmation {
        Some(value) => value,
        None => prompt_password("Confirm password")?,
    };

    let mut input = FormInput::new();
    input.insert("name".to_string(), name.clone());
    input.insert("email".to_string(), email.clone());
    input.insert("password".to_string(), password.clone());
    input.insert(
        "password_confirmation".to_string(),
        password_confirmation.clone(),
    );
    validate_fields(
        &make_signup_validation(),
        &["name", "email", "password", "password_confirmation"],
        &input,
    )?;

    let account = ctx
        .add_account
        .add(&AddAccountParams {
            name,
            email,
            password,
            password_confirmation,
        })
        .await
        .map_err(CliError::from)?;
    ctx.session.update(&account).await.map_err(CliError::from)?;

    println!("Account created. Signed in as {}.", account.name);
    Ok(())
}
