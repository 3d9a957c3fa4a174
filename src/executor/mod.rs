//! Query executor subsystem
//!
//! Runs a parsed query against one decoded file and renders the result.
//!
//! # Execution flow (strict order)
//!
//! 1. Read and decode the source file
//! 2. Check referenced columns against the header
//! 3. Filter rows by the WHERE chain (left to right, no precedence)
//! 4. Stable sort by the ORDER BY column, if any
//! 5. Project onto the select list
//! 6. Serialize to a JSON array of string-valued objects

mod compare;
mod errors;
mod executor;
mod filters;
mod projector;
mod result;
mod serializer;
mod sorter;

pub use compare::ValueComparator;
pub use errors::{ErrorKind, ExecutorError, ExecutorResult};
pub use executor::QueryEngine;
pub use filters::PredicateFilter;
pub use projector::Projector;
pub use result::{OutputRow, QueryOutput};
pub use serializer::ResultSerializer;
pub use sorter::ResultSorter;
