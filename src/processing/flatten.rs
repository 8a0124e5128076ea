//! Flatten/dedup stage.

use std::collections::HashSet;
use std::hash::Hash;

use crate::types::{Book, Category};

/// Project every element to zero or more values and collect the distinct ones.
///
/// Projections returning `None` (or any empty iterator) contribute nothing. Duplicates collapse
/// by value equality; iteration order of the returned set is unspecified.
pub fn flat_map_unique<T, U, I, F>(items: &[T], projection: F) -> HashSet<U>
where
    U: Eq + Hash,
    I: IntoIterator<Item = U>,
    F: FnMut(&T) -> I,
{
    items.iter().flat_map(projection).collect()
}

/// The distinct categories present in `books`. Uncategorized books are skipped.
pub fn distinct_categories(books: &[Book]) -> HashSet<Category> {
    flat_map_unique(books, |book| book.category)
}
