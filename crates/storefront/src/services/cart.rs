//! Adding catalog products to the visitor's session cart.

use thiserror::Error;
use tower_sessions::Session;
use tracing::{instrument, warn};

use sports_store_core::{Cart, ProductId};

use crate::db::{ProductRepository, RepositoryError};
use crate::middleware::{load_cart, store_cart};

/// Errors from cart operations that touch the catalog.
#[derive(Debug, Error)]
pub enum CartError {
    /// No product with this ID exists.
    #[error("product {0} not found")]
    UnknownProduct(ProductId),

    /// The catalog could not be read.
    #[error("failed to load product: {0}")]
    Repository(#[from] RepositoryError),

    /// The session cart could not be read or written.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

/// Add `quantity` of a product to the session cart and return the updated cart.
///
/// The product is looked up first; an unknown ID leaves the session untouched.
///
/// # Errors
///
/// Returns `CartError::UnknownProduct` if the product does not exist, or a
/// repository or session error if either store fails.
#[instrument(skip(session, products))]
pub async fn add_to_cart<R: ProductRepository>(
    session: &Session,
    products: &R,
    product_id: ProductId,
    quantity: u32,
) -> Result<Cart, CartError> {
    let Some(product) = products.find_product(product_id).await? else {
        warn!(%product_id, "Add to cart for unknown product");
        return Err(CartError::UnknownProduct(product_id));
    };

    let mut cart = load_cart(session).await?;
    cart.add_item(product, quantity);
    store_cart(session, &cart).await?;

    Ok(cart)
}
