//! Tabular data subsystem
//!
//! Decodes delimited text into a header and rows of raw string cells.
//! Every row carries exactly the header's columns, in header order.

mod decoder;
mod errors;
mod row;

pub use decoder::{Delimiter, TableDecoder};
pub use errors::{TableError, TableErrorCode, TableResult};
pub use row::{Row, Table};
