//! # In-Memory Backend

use std::collections::HashMap;

use super::backend::FileAccess;
use super::errors::{FileAccessError, FileAccessResult};

/// Serves file contents from memory
#[derive(Debug, Clone, Default)]
pub struct MemoryFileAccess {
    files: HashMap<String, String>,
}

impl MemoryFileAccess {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a file
    pub fn insert(&mut self, file_name: impl Into<String>, content: impl Into<String>) {
        self.files.insert(file_name.into(), content.into());
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with_file(mut self, file_name: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(file_name, content);
        self
    }

    fn get(&self, file_name: &str) -> FileAccessResult<&str> {
        self.files
            .get(file_name)
            .map(String::as_str)
            .ok_or_else(|| FileAccessError::NotFound(file_name.to_string()))
    }
}

impl FileAccess for MemoryFileAccess {
    fn read_lines(&self, file_name: &str) -> FileAccessResult<Vec<String>> {
        Ok(self.get(file_name)?.lines().map(String::from).collect())
    }

    fn read_full_content(&self, file_name: &str) -> FileAccessResult<String> {
        self.get(file_name).map(String::from)
    }
}
