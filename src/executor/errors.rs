//! Executor error types
//!
//! Every failure of a query call is one of these. Errors from the query,
//! table and file access subsystems pass through unmodified.

use thiserror::Error;

use crate::file_access::FileAccessError;
use crate::query::QueryError;
use crate::table::{TableError, TableErrorCode};

/// Failure kinds visible to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Query text does not match the grammar
    QuerySyntax,
    /// Empty header or a row whose width differs from the header
    MalformedTable,
    /// A referenced column is not in the header
    UnknownColumn,
    /// The source file could not be read
    FileAccess,
    /// Result rows could not be rendered
    Serialization,
}

/// Executor error
#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("{}: {}", .0.code(), .0)]
    FileAccess(#[from] FileAccessError),

    #[error("CSVQ_SERIALIZATION: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ExecutorError {
    /// Returns the failure kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExecutorError::Query(_) => ErrorKind::QuerySyntax,
            ExecutorError::Table(e) => match e.code() {
                TableErrorCode::CsvqMalformedTable => ErrorKind::MalformedTable,
                TableErrorCode::CsvqUnknownColumn => ErrorKind::UnknownColumn,
            },
            ExecutorError::FileAccess(_) => ErrorKind::FileAccess,
            ExecutorError::Serialization(_) => ErrorKind::Serialization,
        }
    }

    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            ExecutorError::Query(e) => e.code().code(),
            ExecutorError::Table(e) => e.code().code(),
            ExecutorError::FileAccess(e) => e.code(),
            ExecutorError::Serialization(_) => "CSVQ_SERIALIZATION",
        }
    }
}

/// Result type for executor operations
pub type ExecutorResult<T> = Result<T, ExecutorError>;
