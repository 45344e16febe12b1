//! Adding catalog products to the session cart.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use rust_decimal::Decimal;
use tower_sessions::{MemoryStore, Session};

use sports_store_core::ProductId;
use sports_store_integration_tests::{InMemoryProducts, product};
use sports_store_storefront::middleware::load_cart;
use sports_store_storefront::services::cart::{self, CartError};

fn catalog() -> InMemoryProducts {
    InMemoryProducts::with(vec![
        product(1, "Watersports", 275),
        product(2, "Soccer", 20),
    ])
}

fn new_session() -> Session {
    Session::new(None, Arc::new(MemoryStore::default()), None)
}

#[tokio::test]
async fn test_add_to_cart_stores_product_in_session() {
    let products = catalog();
    let session = new_session();

    let returned = cart::add_to_cart(&session, &products, ProductId::new(2), 3)
        .await
        .unwrap();

    let stored = load_cart(&session).await.unwrap();
    assert_eq!(stored, returned);
    assert_eq!(stored.item_count(), 3);
    assert_eq!(stored.lines().first().unwrap().product.name, "P2");
    assert_eq!(stored.compute_total(), Decimal::new(60, 0));
}

#[tokio::test]
async fn test_adding_same_product_twice_merges_quantities() {
    let products = catalog();
    let session = new_session();

    cart::add_to_cart(&session, &products, ProductId::new(1), 1)
        .await
        .unwrap();
    cart::add_to_cart(&session, &products, ProductId::new(1), 2)
        .await
        .unwrap();

    let stored = load_cart(&session).await.unwrap();
    assert_eq!(stored.lines().len(), 1);
    assert_eq!(stored.lines().first().unwrap().quantity, 3);
}

#[tokio::test]
async fn test_unknown_product_leaves_session_cart_unchanged() {
    let products = catalog();
    let session = new_session();
    cart::add_to_cart(&session, &products, ProductId::new(1), 1)
        .await
        .unwrap();

    let err = cart::add_to_cart(&session, &products, ProductId::new(99), 1)
        .await
        .unwrap_err();

    assert!(matches!(err, CartError::UnknownProduct(id) if id == ProductId::new(99)));
    let stored = load_cart(&session).await.unwrap();
    assert_eq!(stored.item_count(), 1);
    assert_eq!(products.save_count(), 0);
}
