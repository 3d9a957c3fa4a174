//! JSON rendering of result rows
//!
//! Rows become objects with keys in selection order; every value is a JSON string.

use super::result::OutputRow;

/// Renders result rows as a JSON array
pub struct ResultSerializer;

impl ResultSerializer {
    /// Compact JSON
    pub fn to_json(rows: &[OutputRow]) -> serde_json::Result<String> {
        serde_json::to_string(rows)
    }

    /// Indented JSON
    pub fn to_json_pretty(rows: &[OutputRow]) -> serde_json::Result<String> {
        serde_json::to_string_pretty(rows)
    }
}
