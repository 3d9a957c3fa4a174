//! Predicate filtering for query execution
//!
//! A WHERE chain is folded strictly left to right: the accumulated result is
//! combined with each following condition by that condition's combinator.
//! Every condition is evaluated, so an unknown column fails the query even
//! when the result is already decided.

use crate::query::{Condition, LikePattern, Predicate};
use crate::table::{Row, TableResult};

use super::compare::ValueComparator;

/// Evaluates predicates against rows
pub struct PredicateFilter;

impl PredicateFilter {
    /// Checks if a row matches. An absent predicate matches every row.
    pub fn matches(predicate: Option<&Predicate>, row: &Row) -> TableResult<bool> {
        match predicate {
            Some(predicate) => Self::evaluate(predicate, row),
            None => Ok(true),
        }
    }

    /// Evaluates a predicate chain against a row
    pub fn evaluate(predicate: &Predicate, row: &Row) -> TableResult<bool> {
        let mut result = Self::matches_condition(&predicate.first, row)?;
        for (op, condition) in &predicate.rest {
            let right = Self::matches_condition(condition, row)?;
            result = op.apply(result, right);
        }
        Ok(result)
    }

    /// Checks if a row matches a single condition
    fn matches_condition(condition: &Condition, row: &Row) -> TableResult<bool> {
        let cell = row.require(condition.column())?;
        Ok(match condition {
            Condition::Compare { op, literal, .. } => ValueComparator::satisfies(*op, cell, literal),
            Condition::Like { pattern, .. } => Self::like_match(pattern, cell),
        })
    }

    /// Case-sensitive LIKE matching
    pub fn like_match(pattern: &LikePattern, value: &str) -> bool {
        match pattern {
            LikePattern::Exact(s) => value == s,
            LikePattern::Prefix(s) => value.starts_with(s.as_str()),
            LikePattern::Suffix(s) => value.ends_with(s.as_str()),
            LikePattern::Contains(s) => value.contains(s.as_str()),
            LikePattern::Enclosed { prefix, suffix } => {
                value.starts_with(prefix.as_str()) && value.ends_with(suffix.as_str())
            }
        }
    }
}
