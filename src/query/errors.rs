//! Query language error types
//!
//! Error codes:
//! - CSVQ_QUERY_SYNTAX (REJECT)

use std::fmt;

/// Query-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorCode {
    /// Query text does not match the grammar
    CsvqQuerySyntax,
}

impl QueryErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            QueryErrorCode::CsvqQuerySyntax => "CSVQ_QUERY_SYNTAX",
        }
    }
}

impl fmt::Display for QueryErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Query error with the offending token when one is known
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    code: QueryErrorCode,
    message: String,
    token: Option<String>,
    position: Option<usize>,
}

impl QueryError {
    /// Create a syntax error without token context
    pub fn syntax(reason: impl Into<String>) -> Self {
        Self {
            code: QueryErrorCode::CsvqQuerySyntax,
            message: reason.into(),
            token: None,
            position: None,
        }
    }

    /// Create a syntax error pointing at a token
    pub fn unexpected(
        expected: impl Into<String>,
        found: impl Into<String>,
        position: usize,
    ) -> Self {
        let found = found.into();
        Self {
            code: QueryErrorCode::CsvqQuerySyntax,
            message: format!(
                "Expected {} but found '{}' at position {}",
                expected.into(),
                found,
                position
            ),
            token: Some(found),
            position: Some(position),
        }
    }

    /// Create a syntax error for input that ended too early
    pub fn unexpected_end(expected: impl Into<String>) -> Self {
        Self {
            code: QueryErrorCode::CsvqQuerySyntax,
            message: format!("Expected {} but the query ended", expected.into()),
            token: None,
            position: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> QueryErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending token, if any
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the byte offset of the offending token, if any
    pub fn position(&self) -> Option<usize> {
        self.position
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for QueryError {}

/// Result type for query parsing
pub type QueryResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string() {
        assert_eq!(QueryErrorCode::CsvqQuerySyntax.code(), "CSVQ_QUERY_SYNTAX");
    }

    #[test]
    fn test_unexpected_carries_token() {
        let err = QueryError::unexpected("FROM", "WHERE", 12);
        assert_eq!(err.token(), Some("WHERE"));
        assert_eq!(err.position(), Some(12));
        assert!(err.message().contains("FROM"));
    }

    #[test]
    fn test_error_display() {
        let err = QueryError::unexpected_end("column name");
        let display = format!("{}", err);
        assert!(display.starts_with("CSVQ_QUERY_SYNTAX"));
        assert!(display.contains("column name"));
    }
}
