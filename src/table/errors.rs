//! Table error types
//!
//! Error codes:
//! - CSVQ_MALFORMED_TABLE (REJECT)
//! - CSVQ_UNKNOWN_COLUMN (REJECT)

use std::fmt;

/// Table-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableErrorCode {
    /// Empty header, bad header names, or a row whose width differs from the header
    CsvqMalformedTable,
    /// A referenced column is not in the header
    CsvqUnknownColumn,
}

impl TableErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            TableErrorCode::CsvqMalformedTable => "CSVQ_MALFORMED_TABLE",
            TableErrorCode::CsvqUnknownColumn => "CSVQ_UNKNOWN_COLUMN",
        }
    }
}

impl fmt::Display for TableErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Table error with line or column context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableError {
    code: TableErrorCode,
    message: String,
    /// 1-based line in the source file, if applicable
    line: Option<usize>,
    /// Column name, if applicable
    column: Option<String>,
}

impl TableError {
    /// Create a malformed table error at a source line
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self {
            code: TableErrorCode::CsvqMalformedTable,
            message: format!("Line {}: {}", line, reason.into()),
            line: Some(line),
            column: None,
        }
    }

    /// Create a field count mismatch error
    pub fn width_mismatch(line: usize, expected: usize, found: usize) -> Self {
        Self::malformed(
            line,
            format!("expected {} fields but found {}", expected, found),
        )
    }

    /// Create an unknown column error
    pub fn unknown_column(column: impl Into<String>) -> Self {
        let c = column.into();
        Self {
            code: TableErrorCode::CsvqUnknownColumn,
            message: format!("Column '{}' does not exist", c),
            line: None,
            column: Some(c),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> TableErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the source line, if any
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// Returns the column name, if any
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for TableError {}

impl From<csv::Error> for TableError {
    fn from(e: csv::Error) -> Self {
        let line = e
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or_default();
        Self::malformed(line, e.to_string())
    }
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;
