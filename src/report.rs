//! Demo driver output: runs every pipeline stage against a catalog and renders the result as
//! human-readable lines, one block per stage.

use std::io::{self, Write};

use tracing::debug;

use crate::processing::{filter, in_category, inventory_total, map, price_below, Discount};
use crate::types::{Catalog, Category};

/// Default price threshold for the selection stage.
pub const DEFAULT_PRICE_THRESHOLD: i64 = 1000;

/// Values baked into each stage invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Books priced strictly below this are selected.
    pub price_threshold: i64,
    /// Category selected by the second selection block.
    pub category: Category,
    /// Transform applied by the transformation block.
    pub discount: Discount,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            price_threshold: DEFAULT_PRICE_THRESHOLD,
            category: Category::Business,
            discount: Discount::default(),
        }
    }
}

/// Render the full report as lines (without trailing newlines).
///
/// Category listing follows [`Category`] declaration order; the underlying set is unordered.
pub fn render_report(catalog: &Catalog, opts: &ReportOptions) -> Vec<String> {
    let books = catalog.books();
    let mut lines = Vec::new();

    lines.push(format!("価格が{}円未満の本のみを抽出する", opts.price_threshold));
    let cheap = filter(books, price_below(opts.price_threshold));
    debug!(stage = "filter", input = books.len(), output = cheap.len(), threshold = opts.price_threshold);
    lines.extend(cheap.iter().map(ToString::to_string));

    lines.push(format!("{}カテゴリの本を抽出する", opts.category.label()));
    let in_cat = filter(books, in_category(opts.category));
    debug!(stage = "filter", input = books.len(), output = in_cat.len(), category = opts.category.name());
    lines.extend(in_cat.iter().map(ToString::to_string));

    lines.push(format!(
        "全ての本の価格を{}%オフにし、タイトルの先頭に「{}」を追加",
        opts.discount.percent_off(),
        opts.discount.title_prefix
    ));
    let discounted = map(books, |b| opts.discount.apply(b));
    debug!(stage = "map", input = books.len(), output = discounted.len(), rate_percent = opts.discount.rate_percent);
    lines.extend(discounted.iter().map(ToString::to_string));

    lines.push("全ての在庫の合計金額を計算する".to_string());
    let total = inventory_total(books);
    debug!(stage = "reduce", input = books.len(), total);
    lines.push(format!(" - 合計金額は{total}円です。"));

    lines.push("カテゴリの一覧を抽出する".to_string());
    let mut categories: Vec<Category> = catalog.categories().into_iter().collect();
    categories.sort();
    debug!(stage = "flat_map_unique", input = books.len(), output = categories.len());
    lines.extend(categories.iter().map(|c| format!(" - {}", c.name())));

    lines
}

/// Write the report to `out`, one line each.
pub fn write_report<W: Write>(out: &mut W, catalog: &Catalog, opts: &ReportOptions) -> io::Result<()> {
    for line in render_report(catalog, opts) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::{render_report, write_report, ReportOptions};
    use crate::processing::Discount;
    use crate::types::{sample_catalog, Catalog};

    #[test]
    fn sample_report_matches_expected_output() {
        let lines = render_report(&sample_catalog(), &ReportOptions::default());
        let expected = vec![
            "価格が1000円未満の本のみを抽出する",
            " - おもしろコミック, 500円, 20冊, コミック",
            " - いぬとねこ, 900円, 80冊, 未分類",
            "ビジネスカテゴリの本を抽出する",
            " - ビジネスのきほん, 1500円, 5冊, ビジネス",
            " - ビジネス英会話, 1000円, 50冊, ビジネス",
            "全ての本の価格を20%オフにし、タイトルの先頭に「(特価)」を追加",
            " - (特価)アートオブアート, 2400円, 30冊, アート",
            " - (特価)ビジネスのきほん, 1200円, 5冊, ビジネス",
            " - (特価)おもしろコミック, 400円, 20冊, コミック",
            " - (特価)昆虫図鑑, 2000円, 30冊, 未分類",
            " - (特価)ビジネス英会話, 800円, 50冊, ビジネス",
            " - (特価)いぬとねこ, 720円, 80冊, 未分類",
            "全ての在庫の合計金額を計算する",
            " - 合計金額は304500円です。",
            "カテゴリの一覧を抽出する",
            " - arts",
            " - business",
            " - comics",
        ];
        assert_eq!(lines, expected);
    }

    #[test]
    fn report_reflects_options() {
        let opts = ReportOptions {
            price_threshold: 600,
            discount: Discount::new(50),
            ..ReportOptions::default()
        };
        let lines = render_report(&sample_catalog(), &opts);
        assert_eq!(lines[0], "価格が600円未満の本のみを抽出する");
        assert_eq!(lines[1], " - おもしろコミック, 500円, 20冊, コミック");
        assert!(lines.contains(&"全ての本の価格を50%オフにし、タイトルの先頭に「(特価)」を追加".to_string()));
        assert!(lines.contains(&" - (特価)アートオブアート, 1500円, 30冊, アート".to_string()));
    }

    #[test]
    fn empty_catalog_still_renders_headers() {
        let lines = render_report(&Catalog::default(), &ReportOptions::default());
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[4], " - 合計金額は0円です。");
    }

    #[test]
    fn write_report_emits_one_line_per_entry() {
        let mut buf = Vec::new();
        write_report(&mut buf, &sample_catalog(), &ReportOptions::default()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 19);
        assert!(text.ends_with("comics\n"));
    }
}
