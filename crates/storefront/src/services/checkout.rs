//! Order submission.
//!
//! The checkout workflow refuses empty carts and incomplete shipping details
//! before anything is written. [`checkout`] never touches the cart itself;
//! [`place_order`] clears the session cart only after the order is saved, so
//! a failed save leaves the visitor's cart intact for a retry.

use thiserror::Error;
use tower_sessions::Session;
use tracing::{info, instrument, warn};

use sports_store_core::validation::GENERAL;
use sports_store_core::{Cart, OrderId, ShippingDetails, ValidationErrors};

use crate::db::{OrderRepository, RepositoryError};
use crate::middleware::{clear_cart, load_cart};

/// Message shown when checking out with nothing in the cart.
pub const EMPTY_CART_MESSAGE: &str = "Sorry, your cart is empty!";

/// Errors that can occur while placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart is empty or the shipping details are incomplete.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The order could not be saved.
    #[error("failed to save order: {0}")]
    Repository(#[from] RepositoryError),

    /// The session cart could not be read or cleared.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

/// Validate the cart and shipping details, then save the order.
///
/// Every validation problem is reported at once: an empty cart is recorded
/// under the general key alongside any missing shipping fields.
///
/// # Errors
///
/// Returns `CheckoutError::Validation` without saving if the cart is empty or
/// the shipping details are incomplete, and `CheckoutError::Repository` if the
/// save fails.
#[instrument(skip_all, fields(lines = cart.lines().len()))]
pub async fn checkout<R: OrderRepository>(
    orders: &R,
    cart: &Cart,
    shipping: ShippingDetails,
) -> Result<OrderId, CheckoutError> {
    let mut errors = shipping.validate().err().unwrap_or_default();
    if cart.is_empty() {
        errors.add(GENERAL, EMPTY_CART_MESSAGE);
    }
    if !errors.is_empty() {
        warn!(%errors, "Checkout rejected");
        return Err(errors.into());
    }

    let order = cart.to_order(shipping);
    let id = orders.save_order(&order).await?;

    info!(order_id = %id, total = %order.total(), "Order placed");
    Ok(id)
}

/// Check out the cart held in the visitor's session.
///
/// The session cart is cleared once the order has been saved, and left as it
/// was on any failure.
///
/// # Errors
///
/// Returns the same errors as [`checkout`], plus `CheckoutError::Session` if
/// the session store cannot be read or written.
pub async fn place_order<R: OrderRepository>(
    session: &Session,
    orders: &R,
    shipping: ShippingDetails,
) -> Result<OrderId, CheckoutError> {
    let cart = load_cart(session).await?;
    let id = checkout(orders, &cart, shipping).await?;
    clear_cart(session).await?;
    Ok(id)
}
