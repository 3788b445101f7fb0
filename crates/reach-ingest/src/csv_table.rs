//! Tolerant CSV parsing for user-supplied contact exports.
//!
//! Files arrive from spreadsheet tools of unknown origin, so the parser is
//! deliberately permissive: malformed quoting degrades gracefully instead of
//! failing, the delimiter (comma or tab) is detected from the header row, and
//! short or long rows are padded or truncated against the header. The only
//! hard failure is a file with no data rows.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::debug;

/// Errors from parsing CSV text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The input had no data rows (blank or header-only file).
    #[error("the CSV file contains no data rows")]
    EmptyInput,
}

/// A parsed CSV file: header row plus one header→value mapping per data row.
///
/// Row order matches source order. Duplicate header names are allowed; the
/// later occurrence's value overwrites the earlier one in a row mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<BTreeMap<String, String>>,
}

impl CsvTable {
    /// Value of `header` in data row `row`, if both exist.
    pub fn value(&self, row: usize, header: &str) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(header))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Parses CSV text into a [`CsvTable`].
///
/// Fails only with [`ParseError::EmptyInput`] when no data rows remain after
/// row splitting; everything else degrades gracefully.
pub fn parse(text: &str) -> Result<CsvTable, ParseError> {
    let raw_rows = split_rows(text);
    if raw_rows.len() < 2 {
        return Err(ParseError::EmptyInput);
    }
    let delimiter = detect_delimiter(&raw_rows[0]);
    let headers = parse_line(&raw_rows[0], delimiter);
    debug!(
        columns = headers.len(),
        rows = raw_rows.len() - 1,
        "parsed csv"
    );
    let mut rows = Vec::with_capacity(raw_rows.len() - 1);
    for line in &raw_rows[1..] {
        let values = parse_line(line, delimiter);
        let mut row = BTreeMap::new();
        for (idx, header) in headers.iter().enumerate() {
            let value = values.get(idx).cloned().unwrap_or_default();
            row.insert(header.clone(), value);
        }
        rows.push(row);
    }
    Ok(CsvTable { headers, rows })
}

/// Reads and parses a CSV file from disk.
pub fn read_csv_file(path: &Path) -> Result<CsvTable> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    parse(&text).with_context(|| format!("parse csv: {}", path.display()))
}

/// Splits raw text into rows, keeping newlines that occur inside quoted
/// fields. Rows that are blank after trimming are skipped. The header is
/// rows[0].
fn split_rows(text: &str) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                // An escaped quote ("") is copied through verbatim so the
                // field pass sees it; a lone quote toggles state.
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                    current.push('"');
                }
            }
            '\r' if !in_quotes => {}
            '\n' if !in_quotes => {
                if current.trim().is_empty() {
                    current.clear();
                } else {
                    rows.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(c),
        }
    }
    if !current.trim().is_empty() {
        rows.push(current);
    }
    rows
}

/// Picks the delimiter from the header row only: comma if present, else tab,
/// else comma. The same delimiter is used for every row.
pub fn detect_delimiter(header_row: &str) -> char {
    if header_row.contains(',') {
        ','
    } else if header_row.contains('\t') {
        '\t'
    } else {
        ','
    }
}

/// Splits one row into fields with the same quote state machine as row
/// splitting, then cleans each field (trim plus one boundary quote pair).
pub fn parse_line(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '"' {
            if chars.peek() == Some(&'"') {
                current.push('"');
                chars.next();
            } else {
                in_quotes = !in_quotes;
                current.push('"');
            }
        } else if c == delimiter && !in_quotes {
            fields.push(clean_field(&current));
            current.clear();
        } else {
            current.push(c);
        }
    }
    fields.push(clean_field(&current));
    fields
}

/// Trims a field and strips one leading and one trailing literal `"` left in
/// place by the quote state machine.
fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_simple() {
        assert_eq!(parse_line("a,b,c", ','), vec!["a", "b", "c"]);
    }

    #[test]
    fn parse_line_trims_fields() {
        assert_eq!(parse_line("  a  ,  b  ", ','), vec!["a", "b"]);
    }

    #[test]
    fn parse_line_quoted_delimiter() {
        assert_eq!(
            parse_line("\"hello, world\",b", ','),
            vec!["hello, world", "b"]
        );
    }

    #[test]
    fn parse_line_escaped_quotes() {
        assert_eq!(
            parse_line("\"she said \"\"hi\"\"\",b", ','),
            vec!["she said \"hi\"", "b"]
        );
    }

    #[test]
    fn parse_line_tab_delimited() {
        assert_eq!(parse_line("a\tb\tc", '\t'), vec!["a", "b", "c"]);
    }

    #[test]
    fn parse_line_stray_quote_degrades_gracefully() {
        // A quote mid-field never errors; it passes through.
        assert_eq!(parse_line("a\"b,c", ','), vec!["a\"b", "c"]);
    }

    #[test]
    fn detect_delimiter_prefers_comma() {
        assert_eq!(detect_delimiter("a,b\tc"), ',');
        assert_eq!(detect_delimiter("a\tb"), '\t');
        assert_eq!(detect_delimiter("lonely"), ',');
    }

    #[test]
    fn split_rows_skips_blank_lines() {
        let rows = split_rows("a,b\n\n   \n1,2\n");
        assert_eq!(rows, vec!["a,b", "1,2"]);
    }

    #[test]
    fn split_rows_keeps_quoted_newlines() {
        let rows = split_rows("a,b\n1,\"line1\nline2\"\n");
        assert_eq!(rows, vec!["a,b", "1,\"line1\nline2\""]);
    }

    #[test]
    fn split_rows_handles_crlf() {
        let rows = split_rows("a,b\r\n1,2\r\n");
        assert_eq!(rows, vec!["a,b", "1,2"]);
    }
}
