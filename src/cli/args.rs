//! CLI argument definitions using clap
//!
//! Commands:
//! - csvquery query <SQL> [--data-dir <dir>] [--pretty]
//! - csvquery explain <SQL>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// csvquery - SQL-like SELECT queries over delimited text files
#[derive(Parser, Debug)]
#[command(name = "csvquery")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a query and print the result rows as JSON
    Query {
        /// Query text, e.g. "SELECT name FROM users.csv WHERE age > 20"
        sql: String,

        /// Directory that file names in FROM are resolved against
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Parse a query and print how it would run, without reading any file
    Explain {
        /// Query text
        sql: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
