//! Aggregation stage.

use crate::types::Book;

/// Fold `items` into an accumulator, strictly left to right.
///
/// An empty input returns `init` unchanged.
pub fn reduce<T, A, F>(items: &[T], init: A, reducer: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    items.iter().fold(init, reducer)
}

/// Total inventory value: the sum of `price × stock` over all books.
///
/// Saturates at the `i64` bounds instead of overflowing, like [`crate::processing::Discount`].
pub fn inventory_total(books: &[Book]) -> i64 {
    reduce(books, 0i64, |acc, book| acc.saturating_add(book.inventory_value()))
}

/// Built-in reduction operations over a single [`BookMetric`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    /// Count all books.
    Count,
    /// Sum of the metric.
    Sum,
    /// Minimum of the metric.
    Min,
    /// Maximum of the metric.
    Max,
}

/// Numeric per-book quantity that a [`ReduceOp`] can aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookMetric {
    Price,
    Stock,
    /// `price × stock`.
    InventoryValue,
}

impl BookMetric {
    /// Read the metric from a book.
    pub fn value_of(self, book: &Book) -> i64 {
        match self {
            BookMetric::Price => book.price,
            BookMetric::Stock => i64::from(book.stock),
            BookMetric::InventoryValue => book.inventory_value(),
        }
    }
}

/// Reduce a metric using a built-in [`ReduceOp`].
///
/// - `Count` always returns `Some(len)`.
/// - `Sum` always returns `Some`, `0` for an empty input; it saturates at the `i64` bounds.
/// - `Min`/`Max` return `None` for an empty input.
pub fn reduce_metric(books: &[Book], metric: BookMetric, op: ReduceOp) -> Option<i64> {
    match op {
        ReduceOp::Count => Some(books.len() as i64),
        ReduceOp::Sum => Some(reduce(books, 0i64, |acc, b| acc.saturating_add(metric.value_of(b)))),
        ReduceOp::Min => reduce(books, None, |acc: Option<i64>, b| {
            let v = metric.value_of(b);
            Some(acc.map_or(v, |a| a.min(v)))
        }),
        ReduceOp::Max => reduce(books, None, |acc: Option<i64>, b| {
            let v = metric.value_of(b);
            Some(acc.map_or(v, |a| a.max(v)))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{inventory_total, reduce, reduce_metric, BookMetric, ReduceOp};
    use crate::ingestion::json::ingest_json_from_str;
    use crate::types::{sample_catalog, Book, Category};

    #[test]
    fn inventory_total_of_sample_catalog() {
        let catalog = sample_catalog();
        assert_eq!(
            inventory_total(catalog.books()),
            3000 * 30 + 1500 * 5 + 500 * 20 + 2500 * 30 + 1000 * 50 + 900 * 80
        );
        assert_eq!(inventory_total(catalog.books()), 304_500);
    }

    #[test]
    fn reduce_of_empty_input_returns_init() {
        let books: Vec<Book> = Vec::new();
        assert_eq!(inventory_total(&books), 0);
        assert_eq!(reduce(&books, 42i64, |acc, b| acc + b.price), 42);
    }

    #[test]
    fn reduce_folds_left_to_right() {
        let catalog = sample_catalog();
        let order = reduce(catalog.books(), String::new(), |mut acc, b| {
            acc.push_str(&b.price.to_string());
            acc.push(',');
            acc
        });
        assert_eq!(order, "3000,1500,500,2500,1000,900,");
    }

    #[test]
    fn reduce_metric_count_sum_min_max() {
        let catalog = sample_catalog();
        let books = catalog.books();

        assert_eq!(reduce_metric(books, BookMetric::Price, ReduceOp::Count), Some(6));
        assert_eq!(reduce_metric(books, BookMetric::Stock, ReduceOp::Sum), Some(215));
        assert_eq!(reduce_metric(books, BookMetric::Price, ReduceOp::Min), Some(500));
        assert_eq!(reduce_metric(books, BookMetric::Price, ReduceOp::Max), Some(3000));
        assert_eq!(
            reduce_metric(books, BookMetric::InventoryValue, ReduceOp::Sum),
            Some(304_500)
        );
    }

    #[test]
    fn inventory_total_saturates_instead_of_overflowing() {
        let catalog =
            ingest_json_from_str(r#"{"title":"x","price":9223372036854775807,"stock":2,"category":"arts"}"#)
                .unwrap();
        assert_eq!(catalog.books()[0].inventory_value(), i64::MAX);
        assert_eq!(inventory_total(catalog.books()), i64::MAX);

        let books = vec![
            Book::new("a", i64::MAX / 2, 1, Some(Category::Arts)),
            Book::new("b", i64::MAX / 2, 1, None),
            Book::new("c", 10, 1, None),
        ];
        assert_eq!(inventory_total(&books), i64::MAX);
        assert_eq!(reduce_metric(&books, BookMetric::Price, ReduceOp::Sum), Some(i64::MAX));

        let negative = vec![Book::new("d", i64::MIN, 3, None), Book::new("e", -1, 1, None)];
        assert_eq!(inventory_total(&negative), i64::MIN);
    }

    #[test]
    fn reduce_metric_on_empty_input() {
        let books: Vec<Book> = Vec::new();
        assert_eq!(reduce_metric(&books, BookMetric::Price, ReduceOp::Count), Some(0));
        assert_eq!(reduce_metric(&books, BookMetric::Price, ReduceOp::Sum), Some(0));
        assert_eq!(reduce_metric(&books, BookMetric::Price, ReduceOp::Min), None);
        assert_eq!(reduce_metric(&books, BookMetric::Stock, ReduceOp::Max), None);
    }
}
