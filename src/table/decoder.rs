//! Delimited text decoding
//!
//! The delimiter is chosen from the header line alone: `;` if it appears more
//! often than `,`, otherwise `,`. Lines are split on every delimiter; quote
//! characters have no meaning and stay in the cell. Fields are trimmed.
//! Blank lines are skipped; any other line must have exactly as many fields
//! as the header.

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::observability::Logger;

use super::errors::{TableError, TableResult};
use super::row::Table;

/// Field delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Semicolon,
}

impl Delimiter {
    /// Picks the delimiter for a header line
    pub fn detect(header_line: &str) -> Self {
        let semicolons = header_line.matches(';').count();
        let commas = header_line.matches(',').count();
        if semicolons > commas {
            Delimiter::Semicolon
        } else {
            Delimiter::Comma
        }
    }

    pub fn as_byte(&self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Semicolon => b';',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Semicolon => ";",
        }
    }
}

/// Decodes file content into a [`Table`]
pub struct TableDecoder;

impl TableDecoder {
    /// Decodes `content`, sniffing the delimiter from the first of `lines`.
    ///
    /// `lines` and `content` are two views of the same file.
    pub fn decode(content: &str, lines: &[String]) -> TableResult<Table> {
        let header_line = lines.first().map(|l| l.trim()).unwrap_or_default();
        if header_line.is_empty() {
            return Err(TableError::malformed(1, "header line is empty"));
        }

        let delimiter = Delimiter::detect(header_line);

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(delimiter.as_byte())
            .flexible(true)
            .quoting(false)
            .trim(Trim::All)
            .from_reader(content.as_bytes());

        let mut records = reader.records();

        let header = match records.next() {
            Some(record) => record?,
            None => return Err(TableError::malformed(1, "header line is empty")),
        };
        let mut table = Table::new(header.iter().map(String::from).collect())?;

        for result in records {
            let record = result?;
            if is_blank(&record) {
                continue;
            }
            let line = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or_default();
            table.push_row(record.iter().map(String::from).collect(), line)?;
        }

        let rows = table.len().to_string();
        Logger::trace(
            "TABLE_DECODED",
            &[("delimiter", delimiter.as_str()), ("rows", &rows)],
        );

        Ok(table)
    }

    /// Decodes content whose lines have not been read separately
    pub fn decode_str(content: &str) -> TableResult<Table> {
        let lines: Vec<String> = content.lines().map(String::from).collect();
        Self::decode(content, &lines)
    }
}

/// A line holding only whitespace decodes as a single empty field
fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record.get(0).is_some_and(str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableErrorCode;

    fn values(table: &Table) -> Vec<Vec<(String, String)>> {
        table
            .rows()
            .iter()
            .map(|r| {
                r.iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect()
            })
            .collect()
    }

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(Delimiter::detect("name,age"), Delimiter::Comma);
        assert_eq!(Delimiter::detect("name;age"), Delimiter::Semicolon);
        assert_eq!(Delimiter::detect("a;b;c,d"), Delimiter::Semicolon);
        assert_eq!(Delimiter::detect("a;b,c"), Delimiter::Comma);
        assert_eq!(Delimiter::detect("name"), Delimiter::Comma);
    }

    #[test]
    fn test_decode_comma_file() {
        let table = TableDecoder::decode_str("name,age\nJohn,20\nAlice,20").unwrap();
        assert_eq!(table.header(), ["name", "age"]);
        assert_eq!(
            values(&table),
            vec![
                vec![pair("name", "John"), pair("age", "20")],
                vec![pair("name", "Alice"), pair("age", "20")],
            ]
        );
    }

    #[test]
    fn test_decode_semicolon_file_trims_fields() {
        let table = TableDecoder::decode_str("name;age\nTom; 35\nJohn;25\n").unwrap();
        assert_eq!(
            values(&table),
            vec![
                vec![pair("name", "Tom"), pair("age", "35")],
                vec![pair("name", "John"), pair("age", "25")],
            ]
        );
    }

    #[test]
    fn test_decode_uses_lines_for_detection() {
        let lines = vec!["name;age".to_string(), "Tom; 35".to_string()];
        let table = TableDecoder::decode("name;age\nTom;35", &lines).unwrap();
        assert_eq!(table.rows()[0].get("age"), Some("35"));
    }

    #[test]
    fn test_crlf_and_trailing_blank_lines() {
        let table = TableDecoder::decode_str("name,age\r\nJohn,20\r\n\r\n   \r\n").unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_blank_line_between_rows_is_skipped() {
        let table = TableDecoder::decode_str("name,age\nJohn,20\n\nAlice,30").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[1].get("name"), Some("Alice"));
    }

    #[test]
    fn test_quotes_are_raw_text() {
        let table = TableDecoder::decode_str("name,note\n\"Tom\",1").unwrap();
        assert_eq!(table.rows()[0].get("name"), Some("\"Tom\""));
    }

    #[test]
    fn test_stray_quote_stays_on_its_line() {
        let table = TableDecoder::decode_str("name,note\n\"Tom,1\nJohn,2\nAnn,3").unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows()[0].get("name"), Some("\"Tom"));
        assert_eq!(table.rows()[2].get("note"), Some("3"));
    }

    #[test]
    fn test_quoted_delimiter_splits() {
        let err = TableDecoder::decode_str("name,city\n\"Smith, J\",Vilnius").unwrap_err();
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn test_empty_header_is_malformed() {
        let err = TableDecoder::decode_str("").unwrap_err();
        assert_eq!(err.code(), TableErrorCode::CsvqMalformedTable);

        let err = TableDecoder::decode_str("   \nJohn,20").unwrap_err();
        assert_eq!(err.code(), TableErrorCode::CsvqMalformedTable);
    }

    #[test]
    fn test_field_count_mismatch_is_malformed() {
        let err = TableDecoder::decode_str("name,age\nJohn,20\nAlice").unwrap_err();
        assert_eq!(err.code(), TableErrorCode::CsvqMalformedTable);
        assert_eq!(err.line(), Some(3));

        let err = TableDecoder::decode_str("name,age\nJohn,20,extra").unwrap_err();
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn test_header_only_file() {
        let table = TableDecoder::decode_str("name,age\n").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.header().len(), 2);
    }

    #[test]
    fn test_duplicate_header_is_malformed() {
        assert!(TableDecoder::decode_str("name,name\na,b").is_err());
    }
}
