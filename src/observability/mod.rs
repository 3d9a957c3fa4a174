//! Observability subsystem
//!
//! Structured JSON logging and scope-based operation tracing. Observability is
//! read-only: nothing logged here affects query results.
//!
//! ```ignore
//! use csvquery::observability::{Logger, ObservationScope, Severity};
//!
//! Logger::set_min_severity(Severity::Info);
//! Logger::info("QUERY_COMPLETE", &[("rows", "42")]);
//! ```

mod logger;
mod scope;

pub use logger::{Logger, Severity};
pub use scope::{ObservationScope, Timer};
