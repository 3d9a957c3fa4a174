//! # File Access Errors

use thiserror::Error;

/// Result type for file access operations
pub type FileAccessResult<T> = Result<T, FileAccessError>;

/// Errors raised by a [`FileAccess`](super::FileAccess) backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileAccessError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("I/O error reading {file}: {message}")]
    Io { file: String, message: String },
}

impl FileAccessError {
    /// Maps an I/O error for `file` onto the file access taxonomy
    pub fn from_io(file: &str, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FileAccessError::NotFound(file.to_string()),
            std::io::ErrorKind::PermissionDenied => {
                FileAccessError::PermissionDenied(file.to_string())
            }
            _ => FileAccessError::Io {
                file: file.to_string(),
                message: err.to_string(),
            },
        }
    }

    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            FileAccessError::NotFound(_) => "CSVQ_FILE_NOT_FOUND",
            FileAccessError::PermissionDenied(_) => "CSVQ_FILE_PERMISSION_DENIED",
            FileAccessError::InvalidPath(_) => "CSVQ_FILE_INVALID_PATH",
            FileAccessError::Io { .. } => "CSVQ_FILE_IO",
        }
    }
}
