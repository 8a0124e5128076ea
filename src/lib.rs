//! `book-pipeline` is a small in-memory data-transformation pipeline over a catalog of inventory
//! records ([`types::Book`]).
//!
//! Four composable, pure stages are provided in [`processing`]:
//!
//! - **selection** ([`processing::filter()`]): keep the books matching a predicate, in order
//! - **transformation** ([`processing::map()`]): derive a new book from every book, e.g. a
//!   [`processing::Discount`]
//! - **aggregation** ([`processing::reduce()`]): fold the catalog into one value, e.g.
//!   [`processing::inventory_total`]
//! - **flatten/dedup** ([`processing::flat_map_unique()`]): project each book to zero or more
//!   values and keep the distinct ones, e.g. [`processing::distinct_categories`]
//!
//! None of the stages mutate their input, so the same catalog can feed any number of them.
//!
//! ## Record model
//!
//! A [`types::Book`] has a title, an integer price (yen), a non-negative stock and an optional
//! [`types::Category`]. A missing category is a valid "uncategorized" state: it renders as
//! `未分類`, never matches a category predicate, and is skipped when collecting categories.
//!
//! ```rust
//! use book_pipeline::types::{Book, Category};
//!
//! let book = Book::new("ビジネスのきほん", 1500, 5, Some(Category::Business));
//! assert_eq!(book.to_string(), " - ビジネスのきほん, 1500円, 5冊, ビジネス");
//! ```
//!
//! ## Processing example
//!
//! ```rust
//! use book_pipeline::processing::{distinct_categories, filter, in_category, inventory_total};
//! use book_pipeline::types::{sample_catalog, Category};
//!
//! let catalog = sample_catalog();
//!
//! let business = filter(catalog.books(), in_category(Category::Business));
//! assert_eq!(business.len(), 2);
//!
//! assert_eq!(inventory_total(catalog.books()), 304_500);
//! assert_eq!(distinct_categories(catalog.books()).len(), 3);
//! ```
//!
//! ## Loading a catalog
//!
//! ```no_run
//! use book_pipeline::ingestion::{ingest_from_path, IngestionOptions};
//!
//! # fn main() -> Result<(), book_pipeline::IngestionError> {
//! // Auto-detects by extension (.csv/.json/.ndjson).
//! let catalog = ingest_from_path("books.csv", &IngestionOptions::default())?;
//! println!("books={}", catalog.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`types`]: record model and the in-memory catalog
//! - [`processing`]: pipeline stages
//! - [`ingestion`]: CSV/JSON catalog loading with observer hooks
//! - [`report`]: renders every stage's output as text
//! - [`error`]: error types used by ingestion

pub mod error;
pub mod ingestion;
pub mod processing;
pub mod report;
pub mod types;

pub use error::{IngestionError, IngestionResult};
