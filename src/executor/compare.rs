//! Value comparison
//!
//! Cells and literals are untyped text. Two values compare as integers when
//! both parse as `i64`; otherwise they compare as strings, ordinally.

use std::cmp::Ordering;

use crate::query::CompareOp;

/// Compares raw cell values
pub struct ValueComparator;

impl ValueComparator {
    /// Integer comparison if both sides parse, ordinal string comparison otherwise
    pub fn compare(left: &str, right: &str) -> Ordering {
        match (left.parse::<i64>(), right.parse::<i64>()) {
            (Ok(l), Ok(r)) => l.cmp(&r),
            _ => left.cmp(right),
        }
    }

    /// Returns true if `cell <op> literal` holds
    pub fn satisfies(op: CompareOp, cell: &str, literal: &str) -> bool {
        let ordering = Self::compare(cell, literal);
        match op {
            CompareOp::Lt => ordering == Ordering::Less,
            CompareOp::Lte => ordering != Ordering::Greater,
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::Gte => ordering != Ordering::Less,
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::NotEq => ordering != Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_comparison() {
        // "9" > "10" as strings, but not as integers
        assert_eq!(ValueComparator::compare("9", "10"), Ordering::Less);
        assert_eq!(ValueComparator::compare("-5", "3"), Ordering::Less);
        assert_eq!(ValueComparator::compare("020", "20"), Ordering::Equal);
    }

    #[test]
    fn test_lexical_fallback() {
        assert_eq!(ValueComparator::compare("Alice", "Bob"), Ordering::Less);
        // One side numeric is not enough
        assert_eq!(ValueComparator::compare("9", "10a"), Ordering::Greater);
        // Ordinal: uppercase sorts before lowercase
        assert_eq!(ValueComparator::compare("Zed", "abe"), Ordering::Less);
        // Decimals are not integers
        assert_eq!(ValueComparator::compare("2.5", "10"), Ordering::Greater);
    }

    #[test]
    fn test_operators() {
        assert!(ValueComparator::satisfies(CompareOp::Lt, "19", "20"));
        assert!(!ValueComparator::satisfies(CompareOp::Lt, "20", "20"));
        assert!(ValueComparator::satisfies(CompareOp::Lte, "20", "20"));
        assert!(ValueComparator::satisfies(CompareOp::Gt, "50", "20"));
        assert!(ValueComparator::satisfies(CompareOp::Gte, "20", "20"));
        assert!(!ValueComparator::satisfies(CompareOp::Gte, "19", "20"));
        assert!(ValueComparator::satisfies(CompareOp::Eq, "John", "John"));
        assert!(!ValueComparator::satisfies(CompareOp::Eq, "John", "john"));
        assert!(ValueComparator::satisfies(CompareOp::NotEq, "21", "20"));
    }
}
