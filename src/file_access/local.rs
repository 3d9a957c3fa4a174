//! # Local Filesystem Backend

use std::fs;
use std::path::{Component, Path, PathBuf};

use super::backend::FileAccess;
use super::errors::{FileAccessError, FileAccessResult};

/// Reads files relative to a root directory
#[derive(Debug, Clone)]
pub struct LocalFileAccess {
    root: PathBuf,
}

impl LocalFileAccess {
    /// Create a new local backend rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a file name under the root. Absolute paths and `..` are rejected.
    fn full_path(&self, file_name: &str) -> FileAccessResult<PathBuf> {
        let relative = Path::new(file_name);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if file_name.is_empty() || escapes {
            return Err(FileAccessError::InvalidPath(file_name.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

impl FileAccess for LocalFileAccess {
    fn read_lines(&self, file_name: &str) -> FileAccessResult<Vec<String>> {
        let content = self.read_full_content(file_name)?;
        Ok(content.lines().map(String::from).collect())
    }

    fn read_full_content(&self, file_name: &str) -> FileAccessResult<String> {
        let path = self.full_path(file_name)?;
        fs::read_to_string(&path).map_err(|e| FileAccessError::from_io(file_name, e))
    }
}
