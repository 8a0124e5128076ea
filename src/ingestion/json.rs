//! JSON catalog ingestion.
//!
//! Supported inputs:
//! - A JSON array of objects: `[{"title":"a","price":1,"stock":2}, ...]`
//! - A single JSON object
//! - Newline-delimited JSON (NDJSON): one object per line
//!
//! `category` may be omitted or `null` for uncategorized books.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value as JsonValue};

use crate::error::{IngestionError, IngestionResult};
use crate::types::{Book, Catalog, Category};

/// Ingest a JSON file into a [`Catalog`].
pub fn ingest_json_from_path(path: impl AsRef<Path>) -> IngestionResult<Catalog> {
    let text = fs::read_to_string(path)?;
    ingest_json_from_str(&text)
}

/// Ingest JSON from an in-memory string into a [`Catalog`].
pub fn ingest_json_from_str(input: &str) -> IngestionResult<Catalog> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(IngestionError::SchemaMismatch {
            message: "json input is empty".to_string(),
        });
    }

    // First try parsing as a single JSON value (array or object).
    match serde_json::from_str::<JsonValue>(trimmed) {
        Ok(JsonValue::Array(items)) => ingest_json_values(&items),
        Ok(v @ JsonValue::Object(_)) => ingest_json_values(std::slice::from_ref(&v)),
        Ok(_) => Err(IngestionError::SchemaMismatch {
            message: "json must be an object, an array of objects, or NDJSON".to_string(),
        }),
        // A broken array can't be NDJSON.
        Err(e) if trimmed.starts_with('[') => Err(e.into()),
        Err(_) => ingest_ndjson(trimmed),
    }
}

fn ingest_ndjson(input: &str) -> IngestionResult<Catalog> {
    let mut values = Vec::new();
    for (i, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let v = serde_json::from_str::<JsonValue>(line).map_err(|e| IngestionError::SchemaMismatch {
            message: format!("invalid ndjson at line {}: {}", i + 1, e),
        })?;
        values.push(v);
    }
    ingest_json_values(&values)
}

fn ingest_json_values(values: &[JsonValue]) -> IngestionResult<Catalog> {
    values
        .iter()
        .enumerate()
        .map(|(idx0, v)| {
            let row = idx0 + 1;
            let obj = v.as_object().ok_or_else(|| IngestionError::SchemaMismatch {
                message: format!("row {row} is not a json object"),
            })?;
            book_from_object(row, obj)
        })
        .collect::<IngestionResult<Vec<_>>>()
        .map(Catalog::new)
}

fn book_from_object(row: usize, obj: &Map<String, JsonValue>) -> IngestionResult<Book> {
    let required = |name: &str| {
        obj.get(name)
            .filter(|v| !v.is_null())
            .ok_or_else(|| IngestionError::SchemaMismatch {
                message: format!("row {row} missing required field '{name}'"),
            })
    };
    let parse_error = |column: &str, v: &JsonValue, message: &str| IngestionError::ParseError {
        row,
        column: column.to_string(),
        raw: v.to_string(),
        message: message.to_string(),
    };

    let title_v = required("title")?;
    let title = title_v
        .as_str()
        .ok_or_else(|| parse_error("title", title_v, "expected string"))?
        .to_string();

    let price_v = required("price")?;
    let price = price_v
        .as_i64()
        .ok_or_else(|| parse_error("price", price_v, "expected integer number"))?;

    let stock_v = required("stock")?;
    let stock = stock_v
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| parse_error("stock", stock_v, "expected non-negative 32-bit integer"))?;

    let category = match obj.get("category") {
        None | Some(JsonValue::Null) => None,
        Some(v) => {
            let raw = v
                .as_str()
                .ok_or_else(|| parse_error("category", v, "expected string or null"))?;
            let category = raw
                .parse::<Category>()
                .map_err(|e| parse_error("category", v, &e.to_string()))?;
            Some(category)
        }
    };

    Ok(Book::new(title, price, stock, category))
}
