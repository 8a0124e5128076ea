//! Selection stage.

use crate::types::{Book, Category};

/// Returns a new `Vec` containing only elements for which `predicate` returns `true`.
///
/// Relative order is preserved and matching elements are cloned unchanged.
pub fn filter<T, F>(items: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    items.iter().filter(|item| predicate(*item)).cloned().collect()
}

/// Predicate matching books priced strictly below `threshold`.
pub fn price_below(threshold: i64) -> impl Fn(&Book) -> bool {
    move |book| book.price < threshold
}

/// Predicate matching books in `category`. Uncategorized books never match.
pub fn in_category(category: Category) -> impl Fn(&Book) -> bool {
    move |book| book.category == Some(category)
}
