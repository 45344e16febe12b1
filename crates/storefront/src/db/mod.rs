//! Database operations for the store's `PostgreSQL` database.
//!
//! ## Tables
//!
//! - `store.product` - The catalog
//! - `store.customer_order` - Placed orders and their shipping details
//! - `store.order_line` - Snapshot of the cart lines an order was placed with
//! - `tower_sessions.session` - Tower-sessions storage (holds visitor carts)
//!
//! # Repositories
//!
//! Handlers and services talk to storage through the [`ProductRepository`] and
//! [`OrderRepository`] traits. The `PostgreSQL` implementations borrow the
//! shared pool and are cheap to construct per request.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/storefront/migrations/` and run via:
//! ```bash
//! cargo run -p sports-store-cli -- migrate
//! ```

pub mod orders;
pub mod products;

use std::future::Future;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use sports_store_core::product::ValidProduct;
use sports_store_core::{Order, OrderId, Product, ProductId};

pub use orders::PgOrderRepository;
pub use products::PgProductRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,
}

/// Read and write access to the catalog.
pub trait ProductRepository: Sync {
    /// Every product in the catalog, ordered by ID.
    fn list_products(&self) -> impl Future<Output = Result<Vec<Product>, RepositoryError>> + Send;

    /// A single product, if it exists.
    fn find_product(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Option<Product>, RepositoryError>> + Send;

    /// Insert a new product (no ID) or update an existing one.
    ///
    /// Updating an ID that does not exist fails with [`RepositoryError::NotFound`].
    fn save_product(
        &self,
        product: &ValidProduct,
    ) -> impl Future<Output = Result<Product, RepositoryError>> + Send;

    /// Delete a product, returning it if it existed.
    fn delete_product(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Option<Product>, RepositoryError>> + Send;
}

/// Persistence for placed orders.
pub trait OrderRepository: Sync {
    /// Save a new order and its lines, returning the assigned ID.
    fn save_order(
        &self,
        order: &Order,
    ) -> impl Future<Output = Result<OrderId, RepositoryError>> + Send;

    /// Orders that have not been shipped yet, oldest first.
    fn list_unshipped(&self) -> impl Future<Output = Result<Vec<Order>, RepositoryError>> + Send;

    /// Flag an order as shipped. Returns `false` if the order does not exist.
    fn mark_shipped(
        &self,
        id: OrderId,
    ) -> impl Future<Output = Result<bool, RepositoryError>> + Send;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
