//! Result types for query execution

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One projected row: output names paired with values, in selection order.
///
/// Repeated output names are kept as repeated entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputRow {
    fields: Vec<(String, String)>,
}

impl OutputRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Returns the value of the first field named `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over (name, value) pairs in selection order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Returns the output names in selection order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for OutputRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Result of query execution
#[derive(Debug, Clone)]
pub struct QueryOutput {
    /// Rows in result order
    pub rows: Vec<OutputRow>,
    /// Number of data rows decoded from the file
    pub scanned_count: usize,
    /// Number of rows returned
    pub returned_count: usize,
}

impl QueryOutput {
    /// Creates an output from projected rows
    pub fn new(rows: Vec<OutputRow>, scanned_count: usize) -> Self {
        Self {
            returned_count: rows.len(),
            scanned_count,
            rows,
        }
    }

    /// Returns true if no rows matched
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of results
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns an iterator over the rows
    pub fn iter(&self) -> impl Iterator<Item = &OutputRow> {
        self.rows.iter()
    }
}
