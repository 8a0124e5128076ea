//! Core record model: [`Category`], [`Book`], and the in-memory [`Catalog`].
//!
//! A [`Catalog`] is an ordered sequence of [`Book`]s. Every catalog operation returns a new value
//! and leaves the source catalog untouched.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IngestionError;
use crate::processing;

/// Display label used for books without a category.
pub const UNCATEGORIZED_LABEL: &str = "未分類";

/// Closed set of book categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Category {
    /// Art books.
    Arts,
    /// Business books.
    Business,
    /// Comics.
    Comics,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 3] = [Category::Arts, Category::Business, Category::Comics];

    /// Stable identifier (`arts`, `business`, `comics`).
    pub const fn name(self) -> &'static str {
        match self {
            Category::Arts => "arts",
            Category::Business => "business",
            Category::Comics => "comics",
        }
    }

    /// Display label shown in rendered book lines.
    pub const fn label(self) -> &'static str {
        match self {
            Category::Arts => "アート",
            Category::Business => "ビジネス",
            Category::Comics => "コミック",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = IngestionError;

    /// Accepts the identifier (case-insensitive) or the display label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed) || c.label() == trimmed)
            .ok_or_else(|| IngestionError::UnknownCategory {
                raw: trimmed.to_string(),
            })
    }
}

impl TryFrom<String> for Category {
    type Error = IngestionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A single inventory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Title, non-empty by convention.
    pub title: String,
    /// Unit price in yen.
    pub price: i64,
    /// Units on hand.
    pub stock: u32,
    /// `None` means uncategorized.
    #[serde(default)]
    pub category: Option<Category>,
}

impl Book {
    /// Create a new book. Never fails.
    pub fn new(title: impl Into<String>, price: i64, stock: u32, category: Option<Category>) -> Self {
        Self {
            title: title.into(),
            price,
            stock,
            category,
        }
    }

    /// The category label, or [`UNCATEGORIZED_LABEL`] when the book has none.
    pub fn category_label(&self) -> &'static str {
        match self.category {
            Some(c) => c.label(),
            None => UNCATEGORIZED_LABEL,
        }
    }

    /// `price × stock`, saturating at the `i64` bounds.
    pub fn inventory_value(&self) -> i64 {
        self.price.saturating_mul(i64::from(self.stock))
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            " - {}, {}円, {}冊, {}",
            self.title,
            self.price,
            self.stock,
            self.category_label()
        )
    }
}

/// Ordered, in-memory collection of books.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Create a catalog from books, keeping their order.
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Number of books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog has no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Borrow the books in order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Iterate the books in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    /// Create a new catalog containing only books that match `predicate`, in original order.
    pub fn filter_books<F>(&self, predicate: F) -> Self
    where
        F: FnMut(&Book) -> bool,
    {
        Self::new(processing::filter(&self.books, predicate))
    }

    /// Create a new catalog by applying `mapper` to every book.
    pub fn map_books<F>(&self, mapper: F) -> Self
    where
        F: FnMut(&Book) -> Book,
    {
        Self::new(processing::map(&self.books, mapper))
    }

    /// Fold all books, left to right, into an accumulator.
    pub fn reduce_books<A, F>(&self, init: A, reducer: F) -> A
    where
        F: FnMut(A, &Book) -> A,
    {
        processing::reduce(&self.books, init, reducer)
    }

    /// Distinct categories present in the catalog. Uncategorized books contribute nothing.
    pub fn categories(&self) -> HashSet<Category> {
        processing::distinct_categories(&self.books)
    }
}

impl FromIterator<Book> for Catalog {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}

impl From<Vec<Book>> for Catalog {
    fn from(books: Vec<Book>) -> Self {
        Self::new(books)
    }
}

/// The built-in six-book demo catalog. Returns a fresh value on every call.
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        Book::new("アートオブアート", 3000, 30, Some(Category::Arts)),
        Book::new("ビジネスのきほん", 1500, 5, Some(Category::Business)),
        Book::new("おもしろコミック", 500, 20, Some(Category::Comics)),
        Book::new("昆虫図鑑", 2500, 30, None),
        Book::new("ビジネス英会話", 1000, 50, Some(Category::Business)),
        Book::new("いぬとねこ", 900, 80, None),
    ])
}
