//! Query parser
//!
//! Grammar (keywords case-insensitive):
//!
//! ```text
//! query       := SELECT select_list FROM file [where] [order]
//! select_list := "*" | column [AS alias] { "," column [AS alias] }
//! where       := WHERE condition { (AND | OR) condition }
//! condition   := column op literal | column LIKE 'pattern'
//! order       := ORDER BY column [ASC | DESC]
//! ```
//!
//! Column names are not checked here; the file is not loaded yet. Column,
//! alias and literal positions accept any word, keywords included, so a
//! header column named `order` is still reachable. Only the file name must
//! not be a keyword.

use super::ast::{
    Condition, LikePattern, LogicalOp, OrderSpec, ParsedQuery, Predicate, SelectItem,
    SortDirection,
};
use super::errors::{QueryError, QueryResult};
use super::lexer::{tokenize, Token, TokenKind};

/// Words that cannot be used as a file name
const KEYWORDS: &[&str] = &[
    "SELECT", "FROM", "WHERE", "AND", "OR", "LIKE", "ORDER", "BY", "AS", "ASC", "DESC",
];

fn is_keyword(word: &str) -> bool {
    KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(word))
}

/// Parses query text into a [`ParsedQuery`]
pub fn parse(text: &str) -> QueryResult<ParsedQuery> {
    QueryParser::new(tokenize(text)?).parse_query()
}

/// Recursive-descent parser over a token stream
pub struct QueryParser {
    tokens: Vec<Token>,
    pos: usize,
}

impl QueryParser {
    /// Creates a parser over already tokenized input
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parses a complete query, requiring all input to be consumed
    pub fn parse_query(&mut self) -> QueryResult<ParsedQuery> {
        self.expect_keyword("SELECT")?;
        let select = self.parse_select_list()?;

        self.expect_keyword("FROM")?;
        let source = self.expect_word("file name")?;

        let mut query = ParsedQuery::new(source, select);

        if self.eat_keyword("WHERE") {
            query = query.with_predicate(self.parse_predicate()?);
        }

        if self.eat_keyword("ORDER") {
            self.expect_keyword("BY")?;
            query = query.with_order(self.parse_order()?);
        }

        if let Some(token) = self.peek() {
            return Err(QueryError::unexpected(
                "end of query",
                token.to_string(),
                token.position,
            ));
        }

        Ok(query)
    }

    fn parse_select_list(&mut self) -> QueryResult<Vec<SelectItem>> {
        if matches!(self.peek().map(|t| &t.kind), Some(TokenKind::Star)) {
            self.pos += 1;
            return Ok(vec![SelectItem::Wildcard]);
        }

        let mut items = Vec::new();
        loop {
            let column = self.expect_name("column name")?;
            let item = if self.eat_keyword("AS") {
                SelectItem::aliased(column, self.expect_name("alias")?)
            } else {
                SelectItem::column(column)
            };
            items.push(item);

            if !self.eat(|k| matches!(k, TokenKind::Comma)) {
                break;
            }
        }
        Ok(items)
    }

    fn parse_predicate(&mut self) -> QueryResult<Predicate> {
        let mut predicate = Predicate::new(self.parse_condition()?);
        loop {
            let op = if self.eat_keyword("AND") {
                LogicalOp::And
            } else if self.eat_keyword("OR") {
                LogicalOp::Or
            } else {
                break;
            };
            predicate = predicate.then(op, self.parse_condition()?);
        }
        Ok(predicate)
    }

    fn parse_condition(&mut self) -> QueryResult<Condition> {
        let column = self.expect_name("column name")?;

        if self.eat_keyword("LIKE") {
            let token = self.next_token("quoted LIKE pattern")?;
            let raw = match token.kind {
                TokenKind::Str(s) => s,
                _ => {
                    return Err(QueryError::unexpected(
                        "quoted LIKE pattern",
                        token.to_string(),
                        token.position,
                    ))
                }
            };
            let pattern = LikePattern::parse(&raw).ok_or_else(|| {
                QueryError::syntax(format!("Unsupported wildcard placement in LIKE '{}'", raw))
            })?;
            return Ok(Condition::like(column, pattern));
        }

        let token = self.next_token("comparison operator")?;
        let op = match token.kind {
            TokenKind::Op(op) => op,
            _ => {
                return Err(QueryError::unexpected(
                    "comparison operator",
                    token.to_string(),
                    token.position,
                ))
            }
        };

        let token = self.next_token("literal")?;
        let literal = match token.kind {
            TokenKind::Str(s) | TokenKind::Word(s) => s,
            _ => {
                return Err(QueryError::unexpected(
                    "literal",
                    token.to_string(),
                    token.position,
                ))
            }
        };

        Ok(Condition::compare(column, op, literal))
    }

    fn parse_order(&mut self) -> QueryResult<OrderSpec> {
        let column = self.expect_name("ORDER BY column")?;
        let direction = if self.eat_keyword("DESC") {
            SortDirection::Desc
        } else {
            self.eat_keyword("ASC");
            SortDirection::Asc
        };
        Ok(OrderSpec { column, direction })
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next_token(&mut self, expected: &str) -> QueryResult<Token> {
        let token = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or_else(|| QueryError::unexpected_end(expected))?;
        self.pos += 1;
        Ok(token)
    }

    fn eat(&mut self, pred: impl Fn(&TokenKind) -> bool) -> bool {
        match self.peek() {
            Some(token) if pred(&token.kind) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        match self.peek() {
            Some(token) if token.is_keyword(keyword) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> QueryResult<()> {
        let token = self.next_token(keyword)?;
        if token.is_keyword(keyword) {
            Ok(())
        } else {
            Err(QueryError::unexpected(
                keyword,
                token.to_string(),
                token.position,
            ))
        }
    }

    /// Any word, keywords included
    fn expect_name(&mut self, expected: &str) -> QueryResult<String> {
        let token = self.next_token(expected)?;
        match token.kind {
            TokenKind::Word(w) => Ok(w),
            _ => Err(QueryError::unexpected(
                expected,
                token.to_string(),
                token.position,
            )),
        }
    }

    /// A word that is not a keyword
    fn expect_word(&mut self, expected: &str) -> QueryResult<String> {
        let token = self.next_token(expected)?;
        match token.kind {
            TokenKind::Word(w) if !is_keyword(&w) => Ok(w),
            _ => Err(QueryError::unexpected(
                expected,
                token.to_string(),
                token.position,
            )),
        }
    }
}
