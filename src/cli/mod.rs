//! CLI module for csvquery
//!
//! Provides command-line interface for:
//! - query: One-shot query execution against a data directory
//! - explain: Parse-only description of a query

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{explain, query, run, run_command};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_json, write_value};
