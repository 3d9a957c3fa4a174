//! CLI command implementations
//!
//! Each command loads the configuration, applies it, runs once and exits.

use std::path::Path;

use crate::executor::{QueryEngine, ResultSerializer};
use crate::file_access::LocalFileAccess;
use crate::observability::Logger;
use crate::query::QueryExplain;

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::CliResult;
use super::io::{write_json, write_value};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.config.as_deref(), cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(config_path: Option<&Path>, cmd: Command) -> CliResult<()> {
    let config = Config::load_or_default(config_path)?;
    Logger::set_min_severity(config.severity()?);

    match cmd {
        Command::Query {
            sql,
            data_dir,
            pretty,
        } => query(config.with_overrides(data_dir, pretty), &sql),
        Command::Explain { sql } => explain(&config, &sql),
    }
}

/// Execute a single query against files under the data directory
pub fn query(config: Config, sql: &str) -> CliResult<()> {
    let json = render_query(&config, sql)?;
    write_json(&json)
}

/// Parse a query and print its explain description
pub fn explain(config: &Config, sql: &str) -> CliResult<()> {
    write_value(&QueryExplain::explain(sql), config.pretty)
}

fn render_query(config: &Config, sql: &str) -> CliResult<String> {
    let engine = QueryEngine::new(LocalFileAccess::new(config.data_path()));
    let output = engine.execute(sql)?;

    let json = if config.pretty {
        ResultSerializer::to_json_pretty(&output.rows)?
    } else {
        ResultSerializer::to_json(&output.rows)?
    };
    Ok(json)
}
