use book_pipeline::processing::{
    distinct_categories, filter, flat_map_unique, in_category, inventory_total, map, price_below, reduce,
    Discount, SALE_PREFIX,
};
use book_pipeline::report::{render_report, ReportOptions};
use book_pipeline::types::{sample_catalog, Book, Catalog, Category};

#[test]
fn stages_chain_through_catalog() {
    let catalog = sample_catalog();
    let discount = Discount::default();

    let on_sale = catalog
        .filter_books(in_category(Category::Business))
        .map_books(|b| discount.apply(b));

    assert_eq!(on_sale.len(), 2);
    assert!(on_sale.iter().all(|b| b.title.starts_with(SALE_PREFIX)));
    assert_eq!(on_sale.reduce_books(0, |acc, b| acc + b.inventory_value()), 1200 * 5 + 800 * 50);
    assert_eq!(on_sale.categories().len(), 1);
}

#[test]
fn map_output_is_valid_input_for_other_stages() {
    let catalog = sample_catalog();
    let discount = Discount::default();
    let discounted = map(catalog.books(), |b| discount.apply(b));

    let cheap = filter(&discounted, price_below(1000));
    let titles: Vec<&str> = cheap.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["(特価)おもしろコミック", "(特価)ビジネス英会話", "(特価)いぬとねこ"]
    );
    assert_eq!(distinct_categories(&discounted), distinct_categories(catalog.books()));
}

#[test]
fn every_stage_is_repeatable_against_the_same_source() {
    let catalog = sample_catalog();
    let discount = Discount::default();

    assert_eq!(
        filter(catalog.books(), price_below(1000)),
        filter(catalog.books(), price_below(1000))
    );
    assert_eq!(
        map(catalog.books(), |b| discount.apply(b)),
        map(catalog.books(), |b| discount.apply(b))
    );
    assert_eq!(inventory_total(catalog.books()), inventory_total(catalog.books()));
    assert_eq!(
        render_report(&catalog, &ReportOptions::default()),
        render_report(&catalog, &ReportOptions::default())
    );
    assert_eq!(catalog, sample_catalog());
}

#[test]
fn generic_stages_work_on_projected_values() {
    let catalog: Catalog = sample_catalog().iter().cloned().collect();
    let stocks = map(catalog.books(), |b| b.stock);
    assert_eq!(reduce(&stocks, 0u32, |acc, s| acc + s), 215);

    let labels = flat_map_unique(catalog.books(), |b: &Book| b.category.map(|c| c.label()));
    assert_eq!(labels.len(), 3);
    assert!(labels.contains("ビジネス"));
}
