//! Output handling for the CLI
//!
//! Result JSON goes to stdout, one document per invocation. Logs and errors
//! go to stderr.

use std::io::{self, Write};

use serde::Serialize;

use super::errors::CliResult;

/// Write a raw JSON string to stdout
pub fn write_json(json_str: &str) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    write_json_to(&mut stdout, json_str)
}

/// Serialize `value` and write it to stdout
pub fn write_value<T: Serialize>(value: &T, pretty: bool) -> CliResult<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    write_json(&json)
}

fn write_json_to<W: Write>(writer: &mut W, json_str: &str) -> CliResult<()> {
    writeln!(writer, "{}", json_str)?;
    writer.flush()?;

    Ok(())
}
