//! Query language subsystem
//!
//! Turns query text into a [`ParsedQuery`]:
//!
//! 1. Tokenize (words, quoted strings, operators)
//! 2. Recursive descent over SELECT / FROM / WHERE / ORDER BY
//! 3. Classify LIKE patterns
//!
//! WHERE clauses are a flat chain: AND and OR share one precedence level
//! and are applied strictly left to right.

mod ast;
mod errors;
mod explain;
mod lexer;
mod parser;

pub use ast::{
    CompareOp, Condition, LikePattern, LogicalOp, OrderSpec, ParsedQuery, Predicate, SelectItem,
    SortDirection,
};
pub use errors::{QueryError, QueryErrorCode, QueryResult};
pub use explain::QueryExplain;
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::{parse, QueryParser};
