//! Decoded rows and tables
//!
//! A [`Row`] shares its column names with the [`Table`] header, so every row
//! of a table has exactly the header's columns in header order.

use std::collections::HashSet;
use std::sync::Arc;

use super::errors::{TableError, TableResult};

/// One data line: header column names paired with raw cell values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    columns: Arc<[String]>,
    values: Vec<String>,
}

impl Row {
    /// Returns the value of `column`, if present
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| self.values[i].as_str())
    }

    /// Returns the value of `column`, or an unknown-column error
    pub fn require(&self, column: &str) -> TableResult<&str> {
        self.get(column)
            .ok_or_else(|| TableError::unknown_column(column))
    }

    /// Iterates over (column, value) pairs in header order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }

    /// Returns the number of cells
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A decoded file: header plus rows in file order
#[derive(Debug, Clone)]
pub struct Table {
    header: Arc<[String]>,
    rows: Vec<Row>,
}

impl Table {
    /// Creates an empty table. Column names must be non-empty and unique.
    pub fn new(header: Vec<String>) -> TableResult<Self> {
        let mut seen = HashSet::new();
        for name in &header {
            if name.is_empty() {
                return Err(TableError::malformed(1, "header contains an empty column name"));
            }
            if !seen.insert(name.as_str()) {
                return Err(TableError::malformed(
                    1,
                    format!("duplicate column name '{}'", name),
                ));
            }
        }

        Ok(Self {
            header: header.into(),
            rows: Vec::new(),
        })
    }

    /// Appends a row decoded from source line `line`
    pub fn push_row(&mut self, values: Vec<String>, line: usize) -> TableResult<()> {
        if values.len() != self.header.len() {
            return Err(TableError::width_mismatch(
                line,
                self.header.len(),
                values.len(),
            ));
        }
        self.rows.push(Row {
            columns: Arc::clone(&self.header),
            values,
        });
        Ok(())
    }

    /// Returns the header column names
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Returns true if `column` is in the header
    pub fn has_column(&self, column: &str) -> bool {
        self.header.iter().any(|c| c == column)
    }

    /// Fails with an unknown-column error unless `column` is in the header
    pub fn require_column(&self, column: &str) -> TableResult<()> {
        if self.has_column(column) {
            Ok(())
        } else {
            Err(TableError::unknown_column(column))
        }
    }

    /// Returns the rows in file order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Consumes the table, returning its rows
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// Returns the number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
