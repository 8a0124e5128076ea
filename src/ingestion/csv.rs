//! CSV catalog ingestion.

use std::path::Path;

use crate::error::{IngestionError, IngestionResult};
use crate::types::{Book, Catalog, Category};

/// Column names a catalog CSV must provide (any order).
pub const COLUMNS: [&str; 4] = ["title", "price", "stock", "category"];

/// Ingest a CSV file into a [`Catalog`].
///
/// Rules:
///
/// - CSV must have headers containing every name in [`COLUMNS`] (order can differ).
/// - An empty `category` cell means the book is uncategorized.
/// - `category` accepts either the category name (`business`) or its label (`ビジネス`).
pub fn ingest_csv_from_path(path: impl AsRef<Path>) -> IngestionResult<Catalog> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    ingest_csv_from_reader(&mut rdr)
}

/// Ingest CSV data from an in-memory string.
pub fn ingest_csv_from_str(input: &str) -> IngestionResult<Catalog> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());
    ingest_csv_from_reader(&mut rdr)
}

/// Ingest CSV data from an existing CSV reader.
pub fn ingest_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> IngestionResult<Catalog> {
    let headers = rdr.headers()?.clone();

    let mut col_idxs = [0usize; 4];
    for (slot, name) in col_idxs.iter_mut().zip(COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| IngestionError::SchemaMismatch {
                message: format!(
                    "missing required column '{name}'. headers={:?}",
                    headers.iter().collect::<Vec<_>>()
                ),
            })?;
    }
    let [title_idx, price_idx, stock_idx, category_idx] = col_idxs;

    let mut books = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row number for users; +1 again because header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;
        let cell = |idx: usize| record.get(idx).unwrap_or("");

        let title = cell(title_idx).trim().to_owned();
        let price = parse_int::<i64>(user_row, "price", cell(price_idx))?;
        let stock = parse_int::<u32>(user_row, "stock", cell(stock_idx))?;
        let category = parse_category(user_row, cell(category_idx))?;

        books.push(Book::new(title, price, stock, category));
    }

    Ok(Catalog::new(books))
}

fn parse_int<T>(row: usize, column: &str, raw: &str) -> IngestionResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| IngestionError::ParseError {
        row,
        column: column.to_owned(),
        raw: raw.to_owned(),
        message: e.to_string(),
    })
}

fn parse_category(row: usize, raw: &str) -> IngestionResult<Option<Category>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<Category>()
        .map(Some)
        .map_err(|e| IngestionError::ParseError {
            row,
            column: "category".to_owned(),
            raw: raw.to_owned(),
            message: e.to_string(),
        })
}
