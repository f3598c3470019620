//! Main commands enum.
//!
//! Each command corresponds to one page of the survey client; missing
//! credential flags fall back to interactive prompts.

use clap::Subcommand;

/// Available commands for the survey client.
#[derive(Subcommand)]
pub enum Commands {
    /// Sign in with an existing account
    Login {
        /// Account e-mail (prompted when omitted)
        #[arg(long)]
        email: Option<String>,
        /// Account password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Create an account and sign it in
    Signup {
        /// Display name (prompted when omitted)
        #[arg(long)]
        name: Option<String>,
        /// Account e-mail (prompted when omitted)
        #[arg(long)]
        email: Option<String>,
        /// Account password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
        /// Password confirmation (prompted when omitted)
        #[arg(long = "password-confirmation")]
        password_confirmation: Option<String>,
    },

    /// List the surveys visible to the signed-in account
    Surveys,

    /// Forget the stored session
    Logout,

    /// Show which account is signed in
    Whoami,
}
