//! Cart and checkout handlers.
//!
//! The cart is kept in the visitor's session. Every mutating handler loads
//! it, applies the change and stores it again before responding.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use sports_store_core::{Cart, CartLine, OrderId, ProductId, ShippingDetails};

use crate::error::{Result, add_breadcrumb};
use crate::middleware::{load_cart, store_cart};
use crate::services::{cart, checkout};
use crate::state::AppState;

use super::products::ProductView;

/// Cart line display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartLineView {
    pub product: ProductView,
    pub quantity: u32,
    pub line_total: Decimal,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            product: ProductView::from(&line.product),
            quantity: line.quantity,
            line_total: line.line_total(),
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total: Decimal,
    pub item_count: u32,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().iter().map(CartLineView::from).collect(),
            total: cart.compute_total(),
            item_count: cart.item_count(),
        }
    }
}

/// Add to cart request body.
#[derive(Debug, Deserialize)]
pub struct AddToCartInput {
    pub product_id: ProductId,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

const fn default_quantity() -> u32 {
    1
}

/// Update quantity request body.
#[derive(Debug, Deserialize)]
pub struct UpdateCartInput {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Remove from cart request body.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartInput {
    pub product_id: ProductId,
}

/// Checkout response body.
#[derive(Debug, Serialize)]
pub struct OrderPlaced {
    pub order_id: OrderId,
}

/// Show the visitor's cart.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<CartView>> {
    let cart = load_cart(&session).await?;
    Ok(Json(CartView::from(&cart)))
}

/// Add a product to the cart.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(input): Json<AddToCartInput>,
) -> Result<Json<CartView>> {
    let cart =
        cart::add_to_cart(&session, &state.products(), input.product_id, input.quantity).await?;

    let product_id = input.product_id.to_string();
    add_breadcrumb("cart", "Added to cart", Some(&[("product_id", product_id.as_str())]));

    Ok(Json(CartView::from(&cart)))
}

/// Change the quantity of a cart line. A quantity of zero removes the line.
#[instrument(skip(session))]
pub async fn update(
    session: Session,
    Json(input): Json<UpdateCartInput>,
) -> Result<Json<CartView>> {
    let mut cart = load_cart(&session).await?;
    cart.update_quantity(input.product_id, input.quantity);
    store_cart(&session, &cart).await?;

    Ok(Json(CartView::from(&cart)))
}

/// Remove a product from the cart.
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    Json(input): Json<RemoveFromCartInput>,
) -> Result<Json<CartView>> {
    let mut cart = load_cart(&session).await?;
    cart.remove_line(input.product_id);
    store_cart(&session, &cart).await?;

    Ok(Json(CartView::from(&cart)))
}

/// Place an order for the cart's contents.
///
/// The cart is cleared only once the order has been saved.
#[instrument(skip_all)]
pub async fn checkout(
    State(state): State<AppState>,
    session: Session,
    Json(shipping): Json<ShippingDetails>,
) -> Result<impl IntoResponse> {
    let order_id = checkout::place_order(&session, &state.orders(), shipping).await?;

    Ok((StatusCode::CREATED, Json(OrderPlaced { order_id })))
}
