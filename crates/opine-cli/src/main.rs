//! CLI entry point.
//!
//! Parses arguments, initializes tracing, invokes the composition root,
//! and dispatches to the command handlers.

use clap::Parser;

use opine_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("{}", console::style(format!("Error: {err:#}")).red());
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig {
        api_url: cli.api_url,
    };
    let ctx = bootstrap(&config)?;

    match cli.command {
        Commands::Login { email, password } => {
            handlers::login::execute(&ctx, email, password).await
        }
        Commands::Signup {
            name,
            email,
            password,
            password_confirmation,
        } => handlers::signup::execute(&ctx, name, email, password, password_confirmation).await,
        Commands::Surveys => handlers::surveys::execute(&ctx).await,
        Commands::Logout => handlers::logout::execute(&ctx).await,
        Commands::Whoami => handlers::whoami::execute(&ctx).await,
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
