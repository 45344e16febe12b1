//! Catalog listing through the service layer.

#![allow(clippy::unwrap_used)]

use sports_store_core::{Product, ProductId};
use sports_store_integration_tests::{InMemoryProducts, product};
use sports_store_storefront::services::catalog;

/// Five products, inserted out of ID order.
fn five_products() -> InMemoryProducts {
    InMemoryProducts::with(vec![
        product(4, "Cat2", 40),
        product(1, "Cat1", 10),
        product(5, "Cat3", 50),
        product(2, "Cat2", 20),
        product(3, "Cat1", 30),
    ])
}

fn ids(products: &[Product]) -> Vec<ProductId> {
    products.iter().map(|p| p.id).collect()
}

#[tokio::test]
async fn test_filter_by_category() {
    let listing = catalog::list_products(&five_products(), Some("Cat2"), 1, 3)
        .await
        .unwrap();

    assert_eq!(ids(&listing.page.products), [ProductId::new(2), ProductId::new(4)]);
    assert_eq!(listing.page.paging.total_items, 2);
    assert_eq!(listing.page.paging.total_pages(), 1);
    assert_eq!(listing.page.current_category.as_deref(), Some("Cat2"));
}

#[tokio::test]
async fn test_second_page_unfiltered() {
    let listing = catalog::list_products(&five_products(), None, 2, 3)
        .await
        .unwrap();

    assert_eq!(ids(&listing.page.products), [ProductId::new(4), ProductId::new(5)]);
    assert_eq!(listing.page.paging.total_items, 5);
    assert_eq!(listing.page.paging.total_pages(), 2);
}

#[tokio::test]
async fn test_blank_category_is_no_filter() {
    let listing = catalog::list_products(&five_products(), Some("  "), 1, 10)
        .await
        .unwrap();

    assert_eq!(listing.page.products.len(), 5);
    assert_eq!(listing.page.current_category, None);
}

#[tokio::test]
async fn test_page_zero_is_first_page() {
    let listing = catalog::list_products(&five_products(), None, 0, 3)
        .await
        .unwrap();

    assert_eq!(listing.page.paging.current_page, 1);
    assert_eq!(ids(&listing.page.products), [ProductId::new(1), ProductId::new(2), ProductId::new(3)]);
}

#[tokio::test]
async fn test_listing_carries_every_category() {
    let listing = catalog::list_products(&five_products(), Some("Cat3"), 1, 3)
        .await
        .unwrap();

    assert_eq!(listing.categories, ["Cat1", "Cat2", "Cat3"]);
}

#[tokio::test]
async fn test_categories_of_empty_catalog() {
    let categories = catalog::list_categories(&InMemoryProducts::default())
        .await
        .unwrap();

    assert!(categories.is_empty());
}
