//! Transformation stage.

use crate::types::Book;

/// Title prefix applied by the default [`Discount`].
pub const SALE_PREFIX: &str = "(特価)";

/// Returns a new `Vec` by applying `mapper` to every element.
///
/// The output has the same length and order as the input; the input is not modified.
pub fn map<T, U, F>(items: &[T], mapper: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    items.iter().map(mapper).collect()
}

/// Sale transform: reprices a book and marks its title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discount {
    /// Share of the original price that is kept, in percent (`80` = 20% off).
    pub rate_percent: u32,
    /// Text prepended to the title.
    pub title_prefix: String,
}

impl Default for Discount {
    fn default() -> Self {
        Self {
            rate_percent: 80,
            title_prefix: SALE_PREFIX.to_string(),
        }
    }
}

impl Discount {
    /// Create a discount keeping `rate_percent` of the price, with the default title prefix.
    pub fn new(rate_percent: u32) -> Self {
        Self {
            rate_percent,
            ..Self::default()
        }
    }

    /// Percentage taken off the price (`20` for the default).
    pub fn percent_off(&self) -> i64 {
        100 - i64::from(self.rate_percent)
    }

    /// Discounted price, truncated toward zero.
    ///
    /// Integer arithmetic keeps the result exact: `901` at 80% is `720`, not a float artifact.
    pub fn price_for(&self, price: i64) -> i64 {
        let scaled = i128::from(price) * i128::from(self.rate_percent) / 100;
        i64::try_from(scaled).unwrap_or(if scaled.is_negative() { i64::MIN } else { i64::MAX })
    }

    /// Derive the discounted copy of `book`. Stock and category are carried over.
    pub fn apply(&self, book: &Book) -> Book {
        Book {
            title: format!("{}{}", self.title_prefix, book.title),
            price: self.price_for(book.price),
            stock: book.stock,
            category: book.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{map, Discount, SALE_PREFIX};
    use crate::types::{sample_catalog, Book, Category};

    #[test]
    fn discount_truncates_instead_of_rounding() {
        let d = Discount::default();
        assert_eq!(d.price_for(1500), 1200);
        assert_eq!(d.price_for(3000), 2400);
        assert_eq!(d.price_for(1), 0);
        assert_eq!(d.price_for(901), 720);
        assert_eq!(d.price_for(999), 799);
        assert_eq!(d.price_for(-901), -720);
    }

    #[test]
    fn discount_prefixes_title_and_keeps_other_fields() {
        let book = Book::new("ビジネスのきほん", 1500, 5, Some(Category::Business));
        let out = Discount::default().apply(&book);

        assert_eq!(out.title, "(特価)ビジネスのきほん");
        assert_eq!(out.price, 1200);
        assert_eq!(out.stock, 5);
        assert_eq!(out.category, Some(Category::Business));
        assert_eq!(out.to_string(), " - (特価)ビジネスのきほん, 1200円, 5冊, ビジネス");
    }

    #[test]
    fn map_preserves_length_order_and_source() {
        let catalog = sample_catalog();
        let discount = Discount::default();
        let out = map(catalog.books(), |b| discount.apply(b));

        assert_eq!(out.len(), catalog.len());
        for (src, dst) in catalog.iter().zip(&out) {
            assert_eq!(dst.title, format!("{SALE_PREFIX}{}", src.title));
            assert_eq!(dst.stock, src.stock);
            assert_eq!(dst.category, src.category);
        }
        let prices: Vec<i64> = out.iter().map(|b| b.price).collect();
        assert_eq!(prices, vec![2400, 1200, 400, 2000, 800, 720]);

        // Original unchanged
        assert_eq!(catalog, sample_catalog());
    }

    #[test]
    fn map_can_change_element_type() {
        let catalog = sample_catalog();
        let prices = map(catalog.books(), |b| b.price);
        assert_eq!(prices, vec![3000, 1500, 500, 2500, 1000, 900]);
    }

    #[test]
    fn custom_rate_reports_percent_off() {
        let d = Discount::new(70);
        assert_eq!(d.percent_off(), 30);
        assert_eq!(d.price_for(1000), 700);
        assert_eq!(Discount::default().percent_off(), 20);
    }
}
