//! Survey-list command handler.
//!
//! Displays every survey visible to the signed-in account in a formatted
//! table. A revoked session ends the stored session so the next login
//! starts clean.

use anyhow::Result;

use opine_core::{DomainError, SurveyModel};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{print_separator, truncate_string, warn_line};

/// Execute the surveys command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    match ctx.survey_list.load_all().await {
        Ok(surveys) => {
            render(&surveys);
            Ok(())
        }
        Err(DomainError::AccessDenied) => {
            // The server no longer accepts the stored token; forget it.
            // The sign-out is best effort and already logged on failure.
            let _ = ctx.session.sign_out().await;
            warn_line("Access denied. Run 'opine login' to sign in again.");
            Err(CliError::from(DomainError::AccessDenied).into())
        }
        Err(err) => Err(CliError::from(err).into()),
    }
}

fn render(surveys: &[SurveyModel]) {
    if surveys.is_empty() {
        println!("No surveys available.");
        return;
    }

    println!("Found {} survey(s):\n", surveys.len());
    println!("{:<4} {:<50} {:<12} Answered", "#", "Question", "Date");
    print_separator(78);

    for (index, survey) in surveys.iter().enumerate() {
        println!(
            "{:<4} {:<50} {:<12} {}",
            index + 1,
            truncate_string(&survey.question, 49),
            survey.date.format("%Y-%m-%d"),
            if survey.did_answer { "yes" } else { "no" }
        );
    }
}
