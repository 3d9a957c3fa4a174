//! Query tokenizer
//!
//! Splits query text into words, quoted strings, operators and punctuation.
//! Keywords are not distinguished here; the parser matches words against
//! keywords case-insensitively.

use std::fmt;

use super::ast::CompareOp;
use super::errors::{QueryError, QueryResult};

/// Token payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Bare word: keyword, identifier, file name or unquoted literal
    Word(String),
    /// Single-quoted string with `''` unescaped
    Str(String),
    /// `*`
    Star,
    /// `,`
    Comma,
    /// Comparison operator
    Op(CompareOp),
}

/// A token and the byte offset where it starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

impl Token {
    /// Returns true if this is a bare word equal to `keyword`, ignoring ASCII case
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(&self.kind, TokenKind::Word(w) if w.eq_ignore_ascii_case(keyword))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenKind::Word(w) => write!(f, "{}", w),
            TokenKind::Str(s) => write!(f, "'{}'", s),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Op(op) => write!(f, "{}", op),
        }
    }
}

pub(super) fn is_word_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, ',' | '*' | '\'' | '<' | '>' | '=' | '!' | '(' | ')')
}

/// Tokenizes query text
pub fn tokenize(text: &str) -> QueryResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some(&(position, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let kind = match c {
            ',' => {
                chars.next();
                TokenKind::Comma
            }
            '*' => {
                chars.next();
                TokenKind::Star
            }
            '(' | ')' => {
                return Err(QueryError::unexpected(
                    "a column, keyword or literal (grouping is not supported)",
                    c.to_string(),
                    position,
                ));
            }
            '<' => {
                chars.next();
                match chars.peek() {
                    Some(&(_, '=')) => {
                        chars.next();
                        TokenKind::Op(CompareOp::Lte)
                    }
                    Some(&(_, '>')) => {
                        chars.next();
                        TokenKind::Op(CompareOp::NotEq)
                    }
                    _ => TokenKind::Op(CompareOp::Lt),
                }
            }
            '>' => {
                chars.next();
                if let Some(&(_, '=')) = chars.peek() {
                    chars.next();
                    TokenKind::Op(CompareOp::Gte)
                } else {
                    TokenKind::Op(CompareOp::Gt)
                }
            }
            '=' => {
                chars.next();
                TokenKind::Op(CompareOp::Eq)
            }
            '!' => {
                chars.next();
                match chars.next() {
                    Some((_, '=')) => TokenKind::Op(CompareOp::NotEq),
                    _ => return Err(QueryError::unexpected("'!='", "!", position)),
                }
            }
            '\'' => {
                chars.next();
                TokenKind::Str(read_quoted(&mut chars, position)?)
            }
            _ => {
                let mut word = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if !is_word_char(c) {
                        break;
                    }
                    word.push(c);
                    chars.next();
                }
                TokenKind::Word(word)
            }
        };

        tokens.push(Token { kind, position });
    }

    Ok(tokens)
}

/// Reads a quoted string body after the opening quote
fn read_quoted(
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
    start: usize,
) -> QueryResult<String> {
    let mut value = String::new();
    loop {
        match chars.next() {
            Some((_, '\'')) => {
                // '' is an escaped quote
                if let Some(&(_, '\'')) = chars.peek() {
                    chars.next();
                    value.push('\'');
                } else {
                    return Ok(value);
                }
            }
            Some((_, c)) => value.push(c),
            None => {
                return Err(QueryError::syntax(format!(
                    "Unterminated string literal starting at position {}",
                    start
                )));
            }
        }
    }
}
