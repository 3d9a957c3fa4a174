//! Query executor
//!
//! One call runs the whole pipeline over one file:
//!
//! 1. Parse the query text
//! 2. Read the named file once through [`FileAccess`]
//! 3. Decode it into a table
//! 4. Check every referenced column against the header
//! 5. Filter rows by the WHERE chain
//! 6. Sort (if ORDER BY is present)
//! 7. Project onto the select list
//! 8. Serialize to JSON
//!
//! Nothing is kept between calls.

use crate::file_access::FileAccess;
use crate::observability::ObservationScope;
use crate::query::{self, OrderSpec, ParsedQuery, SelectItem};
use crate::table::{Table, TableDecoder, TableError, TableResult};

use super::errors::{ExecutorError, ExecutorResult};
use super::filters::PredicateFilter;
use super::projector::Projector;
use super::result::QueryOutput;
use super::serializer::ResultSerializer;
use super::sorter::ResultSorter;

/// Query engine over a file access backend
pub struct QueryEngine<F: FileAccess> {
    files: F,
}

impl<F: FileAccess> QueryEngine<F> {
    /// Creates a new engine
    pub fn new(files: F) -> Self {
        Self { files }
    }

    /// Returns the file access backend
    pub fn files(&self) -> &F {
        &self.files
    }

    /// Runs a query and returns the result rows as a compact JSON array
    pub fn query(&self, text: &str) -> ExecutorResult<String> {
        let output = self.execute(text)?;
        Ok(ResultSerializer::to_json(&output.rows)?)
    }

    /// Runs a query and returns the result rows
    pub fn execute(&self, text: &str) -> ExecutorResult<QueryOutput> {
        let scope = ObservationScope::with_fields("QUERY", &[("query", text)]);

        let result = query::parse(text)
            .map_err(ExecutorError::from)
            .and_then(|parsed| self.execute_parsed(&parsed));

        match &result {
            Ok(output) => {
                let rows = output.returned_count.to_string();
                let scanned = output.scanned_count.to_string();
                scope.complete_with_fields(&[("rows", &rows), ("scanned", &scanned)]);
            }
            Err(err) => scope.fail(err.code(), &err.to_string()),
        }

        result
    }

    /// Runs an already parsed query
    pub fn execute_parsed(&self, query: &ParsedQuery) -> ExecutorResult<QueryOutput> {
        // One read per call; lines are derived from the same content
        let content = self.files.read_full_content(&query.source)?;
        let table = TableDecoder::decode_str(&content)?;

        let order = Self::resolve_columns(query, &table)?;
        let scanned_count = table.len();

        let mut matched = Vec::new();
        for row in table.into_rows() {
            if PredicateFilter::matches(query.predicate.as_ref(), &row)? {
                matched.push(row);
            }
        }

        let sorted = ResultSorter::sort(matched, order.as_ref())?;

        let rows = sorted
            .iter()
            .map(|row| Projector::project(&query.select, row))
            .collect::<TableResult<Vec<_>>>()?;

        Ok(QueryOutput::new(rows, scanned_count))
    }

    /// Checks every referenced column against the header, so a query over a
    /// header-only file fails the same way as one over a populated file.
    ///
    /// Returns the ORDER BY spec rewritten to its source column.
    fn resolve_columns(query: &ParsedQuery, table: &Table) -> TableResult<Option<OrderSpec>> {
        for source in query.select.iter().filter_map(SelectItem::source) {
            table.require_column(source)?;
        }

        if let Some(predicate) = &query.predicate {
            for condition in predicate.conditions() {
                table.require_column(condition.column())?;
            }
        }

        query
            .order
            .as_ref()
            .map(|order| Self::resolve_order(order, &query.select, table))
            .transpose()
    }

    /// ORDER BY may name a header column or an output alias; header columns win
    fn resolve_order(
        order: &OrderSpec,
        select: &[SelectItem],
        table: &Table,
    ) -> TableResult<OrderSpec> {
        if table.has_column(&order.column) {
            return Ok(order.clone());
        }

        select
            .iter()
            .find_map(|item| match item {
                SelectItem::Column { source, output } if *output == order.column => {
                    Some(OrderSpec {
                        column: source.clone(),
                        direction: order.direction,
                    })
                }
                _ => None,
            })
            .ok_or_else(|| TableError::unknown_column(&order.column))
    }
}
