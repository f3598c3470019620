//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the opine survey client.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "opine")]
#[command(about = "Sign in to the survey platform and answer surveys")]
#[command(version)]
pub struct Cli {
    /// Override the API base URL for this invocation
    #[arg(long = "api-url", env = "OPINE_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        // Verify the CLI parser can be constructed
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "opine",
            "--verbose",
            "--api-url",
            "https://surveys.example.com/api",
            "surveys",
        ]);
        assert!(cli.verbose);
        assert_eq!(
            cli.api_url,
            Some("https://surveys.example.com/api".to_string())
        );
        assert!(matches!(cli.command, Commands::Surveys));
    }

    #[test]
    fn test_login_flags() {
        let cli = Cli::parse_from(["opine", "login", "--email", "ana@example.com"]);
        match cli.command {
            Commands::Login { email, password } => {
                assert_eq!(email, Some("ana@example.com".to_string()));
                assert_eq!(password, None);
            }
            _ => panic!("expected login command"),
        }
    }
}
