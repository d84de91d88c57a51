//! CSV and TSV record parsing
//!
//! Records carry no header line: every non-blank line is one row and its
//! field count must match the table's column count (checked by the caller).
//! Quoted fields follow the usual conventions: `"a,b"`, doubled quotes for a
//! literal quote, and newlines inside quotes.
//!
//! ## Memory Limits
//!
//! Inputs with more than [`MAX_LOAD_ROWS`] records are rejected with
//! [`DataError::TooManyRows`].

use crate::constants::{CSV_DELIMITER, MAX_LOAD_ROWS, TSV_DELIMITER};
use crate::data::error::{DataError, DataResult};
use crate::types::Row;
use std::path::Path;

/// Parse a CSV or TSV file into rows
///
/// `.tsv` files are tab-separated; everything else is comma-separated.
pub fn parse_csv_file(path: &Path) -> DataResult<Vec<Row>> {
    let content = std::fs::read_to_string(path)?;
    parse_csv_records(&content, delimiter_for(path))
}

/// Parse CSV/TSV content from a string
///
/// Blank lines are skipped and unquoted fields are trimmed.
pub fn parse_csv_records(content: &str, delimiter: char) -> DataResult<Vec<Row>> {
    let mut records: Vec<Row> = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut line = 1;
    let mut quote_opened_on = 1;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if !quoted && field.trim().is_empty() => {
                field.clear();
                in_quotes = true;
                quoted = true;
                quote_opened_on = line;
            }
            c if c == delimiter => {
                fields.push(finish_field(&mut field, quoted));
                quoted = false;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                finish_record(&mut records, &mut fields, &mut field, quoted)?;
                quoted = false;
                line += 1;
            }
            c if quoted => {
                if !c.is_whitespace() {
                    return Err(DataError::Csv {
                        line,
                        message: format!("unexpected '{c}' after closing quote"),
                    });
                }
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(DataError::Csv {
            line: quote_opened_on,
            message: "unterminated quoted field".to_string(),
        });
    }
    finish_record(&mut records, &mut fields, &mut field, quoted)?;

    Ok(records)
}

fn finish_field(field: &mut String, quoted: bool) -> String {
    let value = std::mem::take(field);
    if quoted {
        value
    } else {
        value.trim().to_string()
    }
}

fn finish_record(
    records: &mut Vec<Row>,
    fields: &mut Vec<String>,
    field: &mut String,
    quoted: bool,
) -> DataResult<()> {
    // Blank line
    if fields.is_empty() && !quoted && field.trim().is_empty() {
        field.clear();
        return Ok(());
    }

    fields.push(finish_field(field, quoted));
    if records.len() >= MAX_LOAD_ROWS {
        return Err(DataError::TooManyRows {
            rows: records.len() + 1, // +1 for the current row that exceeded limit
            max_rows: MAX_LOAD_ROWS,
        });
    }
    records.push(Row::new(std::mem::take(fields)));
    Ok(())
}

/// Field delimiter for a record file, chosen by extension only
pub fn delimiter_for(path: &Path) -> char {
    let is_tsv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("tsv"));
    if is_tsv { TSV_DELIMITER } else { CSV_DELIMITER }
}

/// Check if a file path is a record file (CSV/TSV/JSON)
pub fn is_data_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| matches!(ext.to_lowercase().as_str(), "csv" | "tsv" | "json"))
        .unwrap_or(false)
}

/// Convert rows to CSV string content, one record per line
pub fn write_csv_records(rows: &[Row], delimiter: char) -> String {
    let separator = delimiter.to_string();
    rows.iter()
        .map(|row| {
            // A lone empty field would read back as a blank line
            if let [only] = row.cells.as_slice() {
                if only.is_empty() {
                    return "\"\"".to_string();
                }
            }
            row.cells
                .iter()
                .map(|cell| quote_csv_field(cell, delimiter))
                .collect::<Vec<_>>()
                .join(&separator)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Quote a CSV field if necessary (delimiter, quotes, newlines, or edge whitespace)
fn quote_csv_field(value: &str, delimiter: char) -> String {
    let needs_quoting = value.contains(delimiter)
        || value.contains('"')
        || value.contains('\n')
        || value.contains('\r')
        || value.trim() != value;

    if needs_quoting {
        // Escape internal quotes by doubling them
        let escaped = value.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        value.to_string()
    }
}
