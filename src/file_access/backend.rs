//! # File Access Trait

use super::errors::FileAccessResult;

/// Read-only access to named files.
///
/// Both methods read the whole file in one call; a failure is final.
pub trait FileAccess {
    /// Read the file as lines, without line terminators
    fn read_lines(&self, file_name: &str) -> FileAccessResult<Vec<String>>;

    /// Read the whole file as text
    fn read_full_content(&self, file_name: &str) -> FileAccessResult<String>;
}

impl<T: FileAccess + ?Sized> FileAccess for &T {
    fn read_lines(&self, file_name: &str) -> FileAccessResult<Vec<String>> {
        (**self).read_lines(file_name)
    }

    fn read_full_content(&self, file_name: &str) -> FileAccessResult<String> {
        (**self).read_full_content(file_name)
    }
}
