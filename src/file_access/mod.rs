//! File access subsystem
//!
//! The engine reads source files only through the [`FileAccess`] trait.
//! Backends: local filesystem under a root directory, and in-memory.

mod backend;
mod errors;
mod local;
mod memory;

pub use backend::FileAccess;
pub use errors::{FileAccessError, FileAccessResult};
pub use local::LocalFileAccess;
pub use memory::MemoryFileAccess;
