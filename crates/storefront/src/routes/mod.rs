//! HTTP route handlers for the store.
//!
//! All responses are JSON.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (database)
//!
//! # Catalog
//! GET  /products               - Product listing (?category=&page=)
//! GET  /categories             - Navigation menu categories
//!
//! # Cart (session)
//! GET  /cart                   - Cart contents and total
//! POST /cart/add               - Add a product
//! POST /cart/update            - Change a line's quantity
//! POST /cart/remove            - Remove a line
//!
//! # Checkout
//! POST /checkout               - Place an order, clears the cart
//!
//! # Admin
//! GET  /admin/products         - Product listing
//! POST /admin/products         - Create or update a product
//! GET  /admin/products/{id}    - Product edit data
//! POST /admin/products/{id}/delete - Delete a product
//! GET  /admin/orders           - Unshipped orders
//! POST /admin/orders/{id}/ship - Mark an order shipped
//! ```

pub mod admin;
pub mod cart;
pub mod products;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(admin::index).post(admin::save))
        .route("/products/{id}", get(admin::edit))
        .route("/products/{id}/delete", post(admin::delete))
        .route("/orders", get(admin::orders))
        .route("/orders/{id}/ship", post(admin::ship))
}

/// Create all routes for the store.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .route("/products", get(products::index))
        .route("/categories", get(products::categories))
        .nest("/cart", cart_routes())
        .route("/checkout", post(cart::checkout))
        .nest("/admin", admin_routes())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
