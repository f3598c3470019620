//! Logout command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the logout command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    ctx.session.sign_out().await.map_err(CliError::from)?;
    println!("Signed out.");
    Ok(())
}
