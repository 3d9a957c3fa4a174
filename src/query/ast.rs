//! Parsed query structures
//!
//! Defines the value types produced by the parser and consumed by the executor.

use std::fmt;

use super::lexer::is_word_char;

/// One projected column, or the wildcard marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectItem {
    /// `*`: every header column under its own name
    Wildcard,
    /// A source column emitted under `output` (the alias, or the column name)
    Column { source: String, output: String },
}

impl SelectItem {
    /// Select a column under its own name
    pub fn column(name: impl Into<String>) -> Self {
        let name = name.into();
        SelectItem::Column {
            output: name.clone(),
            source: name,
        }
    }

    /// Select a column under an alias
    pub fn aliased(name: impl Into<String>, alias: impl Into<String>) -> Self {
        SelectItem::Column {
            source: name.into(),
            output: alias.into(),
        }
    }

    /// Returns the source column, or None for the wildcard
    pub fn source(&self) -> Option<&str> {
        match self {
            SelectItem::Wildcard => None,
            SelectItem::Column { source, .. } => Some(source),
        }
    }
}

impl fmt::Display for SelectItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectItem::Wildcard => write!(f, "*"),
            SelectItem::Column { source, output } if source == output => write!(f, "{}", source),
            SelectItem::Column { source, output } => write!(f, "{} AS {}", source, output),
        }
    }
}

/// Ordering comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Lt,
    Lte,
    Gt,
    Gte,
    Eq,
    NotEq,
}

impl CompareOp {
    /// Returns the operator as written in a query
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Lt => "<",
            CompareOp::Lte => "<=",
            CompareOp::Gt => ">",
            CompareOp::Gte => ">=",
            CompareOp::Eq => "=",
            CompareOp::NotEq => "!=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A classified LIKE pattern.
///
/// `%` is the only metacharacter and may appear in one position per match kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LikePattern {
    /// No wildcard: exact equality
    Exact(String),
    /// `X%`
    Prefix(String),
    /// `%X`
    Suffix(String),
    /// `%X%`
    Contains(String),
    /// `X%Y`
    Enclosed { prefix: String, suffix: String },
}

impl LikePattern {
    /// Classifies a raw pattern. Returns None for unsupported wildcard placement.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.matches('%').count() {
            0 => Some(LikePattern::Exact(raw.to_string())),
            1 => {
                if let Some(rest) = raw.strip_prefix('%') {
                    Some(LikePattern::Suffix(rest.to_string()))
                } else if let Some(rest) = raw.strip_suffix('%') {
                    Some(LikePattern::Prefix(rest.to_string()))
                } else {
                    let (prefix, suffix) = raw.split_once('%')?;
                    Some(LikePattern::Enclosed {
                        prefix: prefix.to_string(),
                        suffix: suffix.to_string(),
                    })
                }
            }
            2 => {
                let inner = raw.strip_prefix('%')?.strip_suffix('%')?;
                Some(LikePattern::Contains(inner.to_string()))
            }
            _ => None,
        }
    }
}

impl fmt::Display for LikePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LikePattern::Exact(s) => write!(f, "{}", s),
            LikePattern::Prefix(s) => write!(f, "{}%", s),
            LikePattern::Suffix(s) => write!(f, "%{}", s),
            LikePattern::Contains(s) => write!(f, "%{}%", s),
            LikePattern::Enclosed { prefix, suffix } => write!(f, "{}%{}", prefix, suffix),
        }
    }
}

/// A single comparison leaf of a WHERE clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// `column <op> literal`
    Compare {
        column: String,
        op: CompareOp,
        literal: String,
    },
    /// `column LIKE 'pattern'`
    Like { column: String, pattern: LikePattern },
}

impl Condition {
    /// Create a comparison condition
    pub fn compare(column: impl Into<String>, op: CompareOp, literal: impl Into<String>) -> Self {
        Condition::Compare {
            column: column.into(),
            op,
            literal: literal.into(),
        }
    }

    /// Create a LIKE condition
    pub fn like(column: impl Into<String>, pattern: LikePattern) -> Self {
        Condition::Like {
            column: column.into(),
            pattern,
        }
    }

    /// Returns the referenced column
    pub fn column(&self) -> &str {
        match self {
            Condition::Compare { column, .. } | Condition::Like { column, .. } => column,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Compare { column, op, literal } => {
                // Re-quote anything that would not lex back as one bare word
                if !literal.is_empty() && literal.chars().all(is_word_char) {
                    write!(f, "{} {} {}", column, op, literal)
                } else {
                    write!(f, "{} {} '{}'", column, op, literal.replace('\'', "''"))
                }
            }
            Condition::Like { column, pattern } => {
                write!(f, "{} LIKE '{}'", column, pattern.to_string().replace('\'', "''"))
            }
        }
    }
}

/// AND / OR combinators. Both share one precedence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    /// Combines an accumulated result with the next condition's result
    pub fn apply(&self, left: bool, right: bool) -> bool {
        match self {
            LogicalOp::And => left && right,
            LogicalOp::Or => left || right,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOp::And => "AND",
            LogicalOp::Or => "OR",
        }
    }
}

/// A WHERE clause as a flat, left-leaning chain.
///
/// `a OR b AND c` evaluates as `(a OR b) AND c`: there is no precedence
/// between AND and OR, and no grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    /// Leftmost condition
    pub first: Condition,
    /// Each following condition with the combinator that joins it
    pub rest: Vec<(LogicalOp, Condition)>,
}

impl Predicate {
    /// Create a predicate from a single condition
    pub fn new(first: Condition) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }

    /// Appends a condition joined by `op`
    pub fn then(mut self, op: LogicalOp, condition: Condition) -> Self {
        self.rest.push((op, condition));
        self
    }

    /// Shorthand for `then(LogicalOp::And, ..)`
    pub fn and(self, condition: Condition) -> Self {
        self.then(LogicalOp::And, condition)
    }

    /// Shorthand for `then(LogicalOp::Or, ..)`
    pub fn or(self, condition: Condition) -> Self {
        self.then(LogicalOp::Or, condition)
    }

    /// Iterates over all conditions in source order
    pub fn conditions(&self) -> impl Iterator<Item = &Condition> {
        std::iter::once(&self.first).chain(self.rest.iter().map(|(_, c)| c))
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        for (op, condition) in &self.rest {
            write!(f, " {} {}", op.as_str(), condition)?;
        }
        Ok(())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// ORDER BY specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSpec {
    /// Column (or output alias) to sort by
    pub column: String,
    /// Sort direction
    pub direction: SortDirection,
}

impl OrderSpec {
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Desc,
        }
    }
}

impl fmt::Display for OrderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.column, self.direction.as_str())
    }
}

/// A fully parsed query. Column references are not resolved until execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Projected columns in selection order (never empty)
    pub select: Vec<SelectItem>,
    /// Source file name
    pub source: String,
    /// Optional WHERE chain
    pub predicate: Option<Predicate>,
    /// Optional ORDER BY
    pub order: Option<OrderSpec>,
}

impl ParsedQuery {
    /// Creates a query with no filter and no ordering
    pub fn new(source: impl Into<String>, select: Vec<SelectItem>) -> Self {
        Self {
            select,
            source: source.into(),
            predicate: None,
            order: None,
        }
    }

    /// Sets the WHERE chain
    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Sets the ORDER BY specification
    pub fn with_order(mut self, order: OrderSpec) -> Self {
        self.order = Some(order);
        self
    }

    /// Returns true if the select list is exactly `*`
    pub fn is_wildcard(&self) -> bool {
        matches!(self.select.as_slice(), [SelectItem::Wildcard])
    }
}
