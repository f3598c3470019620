//! Whoami command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the whoami command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    match ctx.session.current().await.map_err(CliError::from)? {
        Some(account) => println!("Signed in as {}.", account.name),
        None => println!("Not signed in. Run 'opine login' to get started."),
    }
    Ok(())
}
