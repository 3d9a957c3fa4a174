//! Explain output for parsed queries
//!
//! Describes what a query will do without loading its file.

use serde::Serialize;

use super::ast::ParsedQuery;
use super::errors::QueryError;

/// Explain output
#[derive(Debug, Clone, Serialize)]
pub struct QueryExplain {
    /// Whether parsing succeeded
    pub accepted: bool,
    /// Select items as written (`name AS Name`, `*`)
    pub select: Vec<String>,
    /// Source file name
    pub source: Option<String>,
    /// Conditions in evaluation order, combinators inline
    pub filter: Option<String>,
    /// Ordering, e.g. `age DESC`
    pub order: Option<String>,
    /// Rejection reason (if rejected)
    pub rejection_reason: Option<String>,
    /// Rejection error code (if rejected)
    pub rejection_code: Option<String>,
}

impl QueryExplain {
    /// Creates an explain from a parsed query
    pub fn from_query(query: &ParsedQuery) -> Self {
        Self {
            accepted: true,
            select: query.select.iter().map(|s| s.to_string()).collect(),
            source: Some(query.source.clone()),
            filter: query.predicate.as_ref().map(|p| p.to_string()),
            order: query.order.as_ref().map(|o| o.to_string()),
            rejection_reason: None,
            rejection_code: None,
        }
    }

    /// Creates an explain from a parse error
    pub fn from_error(err: &QueryError) -> Self {
        Self {
            accepted: false,
            select: Vec::new(),
            source: None,
            filter: None,
            order: None,
            rejection_reason: Some(err.message().to_string()),
            rejection_code: Some(err.code().code().to_string()),
        }
    }

    /// Parses `text` and explains the result, accepted or not
    pub fn explain(text: &str) -> Self {
        match super::parser::parse(text) {
            Ok(query) => Self::from_query(&query),
            Err(err) => Self::from_error(&err),
        }
    }
}
