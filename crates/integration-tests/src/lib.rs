//! Integration tests for Sports Store.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sports-store-integration-tests
//! ```
//!
//! No database is needed. Service scenarios run against the in-memory
//! repositories below; HTTP scenarios drive the real router with an in-memory
//! session store and a lazily connected pool whose database is unreachable.
//!
//! # Test Categories
//!
//! - `catalog` - Listing, filtering and paging through the service layer
//! - `cart` - Adding catalog products to the session cart
//! - `checkout` - Cart to order, including failure handling
//! - `admin` - Product maintenance and order fulfilment
//! - `http` - Router behaviour that does not need the database

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::sync::Mutex;
use std::time::Duration;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use rust_decimal::Decimal;
use secrecy::SecretString;
use sqlx::postgres::PgPoolOptions;
use tower_sessions::MemoryStore;

use sports_store_core::product::ValidProduct;
use sports_store_core::{Order, OrderId, Price, Product, ProductId, ShippingDetails};
use sports_store_storefront::config::StoreConfig;
use sports_store_storefront::db::{OrderRepository, ProductRepository, RepositoryError};
use sports_store_storefront::middleware::session_layer_with_store;
use sports_store_storefront::state::AppState;

/// A product with a generated name and description.
#[must_use]
pub fn product(id: i32, category: &str, price: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("P{id}"),
        description: format!("Product {id}"),
        price: Price::new(Decimal::new(price, 0)).unwrap(),
        category: category.to_owned(),
    }
}

/// Complete shipping details.
#[must_use]
pub fn shipping() -> ShippingDetails {
    ShippingDetails {
        name: "Joe Smith".to_owned(),
        line1: "1 Main Street".to_owned(),
        city: "Springfield".to_owned(),
        state: "IL".to_owned(),
        country: "USA".to_owned(),
        ..ShippingDetails::default()
    }
}

/// In-memory catalog that counts writes.
#[derive(Default)]
pub struct InMemoryProducts {
    products: Mutex<Vec<Product>>,
    saves: AtomicUsize,
}

impl InMemoryProducts {
    /// A catalog holding `products`.
    #[must_use]
    pub fn with(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of `save_product` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Current catalog contents.
    pub fn snapshot(&self) -> Vec<Product> {
        self.products.lock().unwrap().clone()
    }
}

impl ProductRepository for InMemoryProducts {
    async fn list_products(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut products = self.snapshot();
        products.sort_by_key(|p| p.id);
        Ok(products)
    }

    async fn find_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(self.snapshot().into_iter().find(|p| p.id == id))
    }

    async fn save_product(&self, product: &ValidProduct) -> Result<Product, RepositoryError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        let mut products = self.products.lock().unwrap();

        let id = match product.id {
            Some(id) => {
                if !products.iter().any(|p| p.id == id) {
                    return Err(RepositoryError::NotFound);
                }
                id
            }
            None => ProductId::new(products.iter().map(|p| p.id.as_i32()).max().unwrap_or(0) + 1),
        };

        let saved = Product {
            id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            category: product.category.clone(),
        };
        products.retain(|p| p.id != id);
        products.push(saved.clone());
        Ok(saved)
    }

    async fn delete_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let mut products = self.products.lock().unwrap();
        let position = products.iter().position(|p| p.id == id);
        Ok(position.map(|i| products.remove(i)))
    }
}

/// In-memory order store; every save fails while `fail` is set.
#[derive(Default)]
pub struct InMemoryOrders {
    orders: Mutex<Vec<Order>>,
    saves: AtomicUsize,
    fail: AtomicBool,
}

impl InMemoryOrders {
    /// Make subsequent saves fail (or succeed again).
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Number of `save_order` calls so far, including failed ones.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Every stored order.
    pub fn snapshot(&self) -> Vec<Order> {
        self.orders.lock().unwrap().clone()
    }
}

impl OrderRepository for InMemoryOrders {
    async fn save_order(&self, order: &Order) -> Result<OrderId, RepositoryError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(RepositoryError::DataCorruption("order store offline".to_owned()));
        }

        let mut orders = self.orders.lock().unwrap();
        let id = OrderId::new(i32::try_from(orders.len()).unwrap() + 1);
        orders.push(Order {
            id: Some(id),
            ..order.clone()
        });
        Ok(id)
    }

    async fn list_unshipped(&self) -> Result<Vec<Order>, RepositoryError> {
        Ok(self.snapshot().into_iter().filter(|o| !o.shipped).collect())
    }

    async fn mark_shipped(&self, id: OrderId) -> Result<bool, RepositoryError> {
        let mut orders = self.orders.lock().unwrap();
        match orders.iter_mut().find(|o| o.id == Some(id)) {
            Some(order) => {
                order.shipped = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Store configuration suitable for tests.
#[must_use]
pub fn test_config() -> StoreConfig {
    StoreConfig {
        database_url: SecretString::from("postgres://localhost/sports_store_test"),
        host: "127.0.0.1".parse().unwrap(),
        port: 3000,
        base_url: "http://localhost:3000".to_owned(),
        page_size: 4,
        sentry_dsn: None,
        sentry_environment: None,
    }
}

/// Address of a database that refuses every connection.
const UNREACHABLE_DATABASE_URL: &str = "postgres://127.0.0.1:1/sports_store_test";

/// The full application router over an in-memory session store.
///
/// The pool points at a database that cannot be reached, so routes that stay
/// in the session work and routes that query the database fail with 500.
#[must_use]
pub fn test_app() -> axum::Router {
    test_app_with_store(MemoryStore::default())
}

/// Like [`test_app`], over a session store the test can seed and inspect.
#[must_use]
pub fn test_app_with_store(store: MemoryStore) -> axum::Router {
    let config = test_config();
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .connect_lazy(UNREACHABLE_DATABASE_URL)
        .unwrap();
    let layer = session_layer_with_store(store, false);
    sports_store_storefront::app(AppState::new(config, pool), layer)
}
