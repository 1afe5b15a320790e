//! Statline CLI binary.
//!
//! - Resolve a single request
//! - Build or refresh a season's player id index
//! - Answer requests from a line-oriented comment stream on stdin

use clap::Parser;
use statline::{Statline, StatlineConfig, init_tracing};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_listen, run_query, run_roster};

    // Parse command-line arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.json_logs)?;

    let config = StatlineConfig::load_with(cli.config.as_deref())?;
    let statline = Statline::from_config(&config)?;

    // Execute the requested command
    match cli.command {
        Commands::Query { text } => {
            run_query(&statline, &text).await?;
        }

        Commands::Roster { season, rebuild } => {
            run_roster(&statline, &season, rebuild).await?;
        }

        Commands::Listen => {
            run_listen(&statline).await?;
        }
    }

    Ok(())
}
