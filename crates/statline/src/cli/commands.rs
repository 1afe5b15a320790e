//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Statline - answers free-text NBA player stat requests
#[derive(Parser, Debug)]
#[command(name = "statline")]
#[command(about = "Answers free-text NBA player stat requests from a local cache", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Extra configuration file layered over the defaults
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve one request, e.g. "Get Paul Pierce's 2008-09 regular season totals"
    Query {
        /// The request text
        text: String,
    },

    /// Build or show the player id index for a season
    Roster {
        /// Season label, e.g. 2016-17
        season: String,

        /// Fetch the roster again even if one is stored
        #[arg(long)]
        rebuild: bool,
    },

    /// Answer matching requests read line by line from stdin
    Listen,
}
