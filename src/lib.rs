//! csvquery - SQL-like SELECT queries over delimited text files
//!
//! A query names one file. The file is decoded (`,` or `;` delimited, first
//! line is the header), filtered, sorted, projected, and returned as a JSON
//! array of objects whose values are all strings.
//!
//! ```ignore
//! use csvquery::executor::QueryEngine;
//! use csvquery::file_access::LocalFileAccess;
//!
//! let engine = QueryEngine::new(LocalFileAccess::new("data"));
//! let json = engine.query("SELECT name FROM users.csv WHERE age > 20 ORDER BY age DESC")?;
//! ```

pub mod cli;
pub mod executor;
pub mod file_access;
pub mod observability;
pub mod query;
pub mod table;
