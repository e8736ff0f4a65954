mod common;

use common::article_with;
use serde_json::json;
use storefront_bff::{
    catalog::{CatalogFilter, SortKey, sort_products},
    client::ArticleQuery,
    models::Article,
};

fn catalog() -> Vec<Article> {
    vec![
        article_with(1, "vestido rojo", "59.90", json!({ "destacado": true, "categoria": 1, "created_at": "2024-01-10T00:00:00Z" })),
        article_with(2, "Blusa blanca", "35.00", json!({ "categoria": 2, "created_at": "2024-03-01T00:00:00Z" })),
        article_with(3, "Abrigo largo", "150.00", json!({ "destacado": true, "categoria": 2, "activo": false, "created_at": "2023-12-24T00:00:00Z" })),
        article_with(4, "Falda plisada", "35.00", json!({ "categoria": 1, "descripcion": "Ideal para el verano", "created_at": null })),
        article_with(5, "Chompa de alpaca", "120.00", json!({ "categoria": 3, "created_at": "2024-02-14T00:00:00Z" })),
    ]
}

fn ids(products: &[Article]) -> Vec<i64> {
    products.iter().map(|p| p.id).collect()
}

#[test]
fn featured_only_returns_featured_products() {
    let filter = CatalogFilter {
        featured_only: true,
        ..CatalogFilter::default()
    };
    let result = filter.apply(&catalog());
    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|p| p.featured));
}

#[test]
fn category_filter_keeps_only_that_category() {
    let filter = CatalogFilter {
        category: Some(2),
        ..CatalogFilter::default()
    };
    let result = filter.apply(&catalog());
    assert_eq!(ids(&result), vec![2, 3]);
    assert!(result.iter().all(|p| p.category_id == Some(2)));
}

#[test]
fn predicates_combine() {
    let filter = CatalogFilter {
        category: Some(2),
        active_only: true,
        featured_only: true,
        search_term: None,
    };
    assert!(filter.apply(&catalog()).is_empty());
}

#[test]
fn search_is_case_insensitive_over_name_and_description() {
    let by_name = CatalogFilter {
        search_term: Some("VESTIDO".to_string()),
        ..CatalogFilter::default()
    };
    assert_eq!(ids(&by_name.apply(&catalog())), vec![1]);

    let by_description = CatalogFilter {
        search_term: Some("verano".to_string()),
        ..CatalogFilter::default()
    };
    assert_eq!(ids(&by_description.apply(&catalog())), vec![4]);
}

#[test]
fn blank_search_matches_everything() {
    let filter = CatalogFilter {
        search_term: Some("   ".to_string()),
        ..CatalogFilter::default()
    };
    assert_eq!(filter.apply(&catalog()).len(), 5);
}

#[test]
fn price_low_is_non_decreasing() {
    let sorted = sort_products(&catalog(), SortKey::PriceLow);
    assert!(sorted.windows(2).all(|w| w[0].price <= w[1].price));
    // Equal prices keep catalog order.
    assert_eq!(&ids(&sorted)[..2], &[2, 4]);
}

#[test]
fn price_high_is_non_increasing() {
    let sorted = sort_products(&catalog(), SortKey::PriceHigh);
    assert!(sorted.windows(2).all(|w| w[0].price >= w[1].price));
}

#[test]
fn name_sort_ignores_case() {
    let sorted = sort_products(&catalog(), SortKey::Name);
    assert_eq!(ids(&sorted), vec![3, 2, 5, 4, 1]);
}

#[test]
fn name_sort_folds_accents() {
    let products = vec![
        article_with(1, "Zapatos", "10.00", json!({})),
        article_with(2, "Ábrigo", "10.00", json!({})),
        article_with(3, "abrigo corto", "10.00", json!({})),
        article_with(4, "Ñandú bolso", "10.00", json!({})),
        article_with(5, "Blusa", "10.00", json!({})),
    ];
    let sorted = sort_products(&products, SortKey::Name);
    assert_eq!(ids(&sorted), vec![2, 3, 5, 4, 1]);
}

#[test]
fn newest_first_with_undated_last() {
    let sorted = sort_products(&catalog(), SortKey::Newest);
    assert_eq!(ids(&sorted), vec![2, 5, 1, 3, 4]);
}

#[test]
fn featured_first_is_stable() {
    let sorted = sort_products(&catalog(), SortKey::Featured);
    assert_eq!(ids(&sorted), vec![1, 3, 2, 4, 5]);
}

#[test]
fn sorting_leaves_input_untouched() {
    let products = catalog();
    let _ = sort_products(&products, SortKey::PriceHigh);
    assert_eq!(ids(&products), vec![1, 2, 3, 4, 5]);
}

#[test]
fn sort_keys_use_storefront_names() {
    let key: SortKey = serde_json::from_str("\"price-low\"").unwrap();
    assert_eq!(key, SortKey::PriceLow);
    assert_eq!(SortKey::default(), SortKey::Name);
}

#[test]
fn upstream_query_leaves_search_client_side() {
    let filter = CatalogFilter {
        category: Some(4),
        active_only: true,
        featured_only: false,
        search_term: Some("falda".to_string()),
    };
    assert_eq!(
        filter.upstream_query(),
        ArticleQuery {
            category: Some(4),
            active: Some(true),
            ..ArticleQuery::default()
        }
    );
}
