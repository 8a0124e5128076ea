//! Catalog sourcing.
//!
//! The pipeline stages only need a [`crate::types::Catalog`]; this module is one way to build
//! one from a file. Most callers should use [`ingest_from_path`] (from [`unified`]) which:
//!
//! - auto-detects format by file extension (or you can override via [`IngestionOptions`])
//! - loads the file into an in-memory [`crate::types::Catalog`]
//! - optionally reports success/failure/alerts to an [`IngestionObserver`]
//!
//! Format-specific functions are also available under [`csv`] and [`json`].

pub mod csv;
pub mod json;
pub mod observability;
pub mod unified;

pub use observability::{
    CompositeObserver, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats, TracingObserver,
};
pub use unified::{ingest_from_path, IngestionFormat, IngestionOptions};
