//! JSON record parsing
//!
//! Records are JSON objects keyed by column header. Key order inside an
//! object is irrelevant: each value is placed by looking its key up in the
//! header list.

use crate::constants::MAX_LOAD_ROWS;
use crate::data::error::{DataError, DataResult};
use crate::types::Row;
use serde_json::Value;
use std::path::Path;

/// Parse a JSON file into rows laid out by `headers`
pub fn parse_json_file(path: &Path, headers: &[String]) -> DataResult<Vec<Row>> {
    let content = std::fs::read_to_string(path)?;
    parse_json_records(&content, headers)
}

/// Parse JSON content from a string
///
/// An object missing some headers yields a shorter row, which the table
/// rejects as an arity mismatch. A key that matches no header is an error.
pub fn parse_json_records(json: &str, headers: &[String]) -> DataResult<Vec<Row>> {
    let value: Value = serde_json::from_str(json)?;
    let array = extract_array(&value)?;

    if array.len() > MAX_LOAD_ROWS {
        return Err(DataError::TooManyRows {
            rows: array.len(),
            max_rows: MAX_LOAD_ROWS,
        });
    }

    array
        .iter()
        .enumerate()
        .map(|(i, item)| -> DataResult<Row> {
            let obj = item.as_object().ok_or_else(|| {
                DataError::InvalidData(format!("record {} is not an object", i))
            })?;

            if let Some(unknown) = obj.keys().find(|k| !headers.contains(*k)) {
                return Err(DataError::UnknownColumn(unknown.clone()));
            }

            Ok(headers
                .iter()
                .filter_map(|header| obj.get(header).map(json_value_to_cell))
                .collect::<Row>())
        })
        .collect()
}

/// Extract the array from JSON value, handling common wrapper patterns
fn extract_array(value: &Value) -> DataResult<&Vec<Value>> {
    match value {
        Value::Array(arr) => Ok(arr),
        Value::Object(obj) => {
            // Try common wrapper patterns: data, rows, items, records, results
            let wrapper_keys = ["data", "rows", "items", "records", "results"];
            for key in wrapper_keys {
                if let Some(Value::Array(arr)) = obj.get(key) {
                    return Ok(arr);
                }
            }
            Err(DataError::InvalidData(
                "JSON must be an array or have a data/rows/items/records/results array"
                    .to_string(),
            ))
        }
        _ => Err(DataError::InvalidData(
            "JSON must be an array of objects".to_string(),
        )),
    }
}

/// Convert a JSON value to display text
fn json_value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(arr) => {
            // Convert arrays to string representation
            arr.iter()
                .map(|v| format!("{}", v))
                .collect::<Vec<_>>()
                .join(", ")
        }
        Value::Object(_) => value.to_string(),
    }
}

/// Convert rows to JSON string content (array of objects, keys in column order)
pub fn write_json_records(headers: &[String], rows: &[Row]) -> String {
    let array: Vec<serde_json::Map<String, Value>> = rows
        .iter()
        .map(|row| {
            headers
                .iter()
                .zip(&row.cells)
                .map(|(header, cell)| (header.clone(), Value::String(cell.clone())))
                .collect()
        })
        .collect();

    serde_json::to_string_pretty(&array).unwrap_or_else(|_| "[]".to_string())
}
