//! Management CLI entry point.
//!
//! Resolves the settings once, then dispatches to the requested command.

use clap::Parser;

use manage_lib::{
    cli::{Cli, Commands},
    commands, ManageResult,
};
use settings::{logging, LoggingConfig, Settings};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    logging::init_tracing(&LoggingConfig::default(), cli.verbose);

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> ManageResult<()> {
    // Load configuration
    let settings = match cli.absolute_base_dir()? {
        Some(base_dir) => Settings::from_env_in(&base_dir)?,
        None => Settings::from_env()?,
    };
    tracing::debug!(?settings, "Configuration loaded");

    let mut stdout = std::io::stdout();

    match cli.command {
        Commands::Show(args) => commands::show::execute(args, &settings, &mut stdout),
        Commands::Check(args) => commands::check::execute(args, &settings, &mut stdout),
        Commands::Database(args) => {
            commands::database::execute(args, &settings, &mut stdout).await
        }
    }
}
