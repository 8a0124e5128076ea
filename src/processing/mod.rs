//! Pipeline stages over book sequences.
//!
//! Each stage is a pure function over a slice; the input is never modified and every call
//! returns a fresh value, so stages can be chained or re-run freely against the same catalog.
//!
//! - [`filter()`]: selection by predicate, order preserving
//! - [`map()`]: element-wise transformation, same length and order
//! - [`reduce()`]: left-to-right fold into a single value
//! - [`flat_map_unique()`]: zero-or-more projection followed by deduplication
//!
//! Book-specific building blocks ([`price_below`], [`in_category`], [`Discount`],
//! [`inventory_total`], [`distinct_categories`], [`reduce_metric`]) are layered on top.
//!
//! ## Example: filter → map → reduce
//!
//! ```rust
//! use book_pipeline::processing::{filter, inventory_total, map, price_below, Discount};
//! use book_pipeline::types::sample_catalog;
//!
//! let catalog = sample_catalog();
//!
//! let cheap = filter(catalog.books(), price_below(1000));
//! let discount = Discount::default();
//! let on_sale = map(&cheap, |b| discount.apply(b));
//!
//! // 400 × 20 + 720 × 80
//! assert_eq!(inventory_total(&on_sale), 65_600);
//! ```

pub mod filter;
pub mod flatten;
pub mod map;
pub mod reduce;

pub use filter::{filter, in_category, price_below};
pub use flatten::{distinct_categories, flat_map_unique};
pub use map::{map, Discount, SALE_PREFIX};
pub use reduce::{inventory_total, reduce, reduce_metric, BookMetric, ReduceOp};
