//! CLI entry point.
//!
//! Loads `.env`, initializes logging, and dispatches to command handlers.

use clap::{CommandFactory, Parser};

use flashdeck_cli::{Cli, Commands, handlers, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    logging::init_tracing(cli.verbose);

    // Dispatch to appropriate handler
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Web(args) => handlers::web::execute(args).await?,
    }

    Ok(())
}
