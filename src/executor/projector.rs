//! Projection of source rows onto the select list

use crate::query::SelectItem;
use crate::table::{Row, TableResult};

use super::result::OutputRow;

/// Maps rows to output shape
pub struct Projector;

impl Projector {
    /// Projects one row. The wildcard expands to every header column in header order.
    pub fn project(select: &[SelectItem], row: &Row) -> TableResult<OutputRow> {
        let mut output = OutputRow::new();
        for item in select {
            match item {
                SelectItem::Wildcard => {
                    for (name, value) in row.iter() {
                        output.push(name, value);
                    }
                }
                SelectItem::Column { source, output: name } => {
                    output.push(name.as_str(), row.require(source)?);
                }
            }
        }
        Ok(output)
    }
}
