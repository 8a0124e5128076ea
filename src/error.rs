use thiserror::Error;

/// Convenience result type for ingestion operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Error type returned when loading a [`crate::types::Catalog`] from an external source.
///
/// The pipeline stages themselves are total and never return errors.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV ingestion error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON ingestion error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input does not have the shape of a book record (missing columns/fields, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A category string matched neither a category name nor a category label.
    #[error("unknown category '{raw}'")]
    UnknownCategory { raw: String },

    /// A value could not be parsed into the required field type.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}
