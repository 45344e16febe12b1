//! Admin handlers: catalog maintenance and order fulfilment.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

use sports_store_core::{Order, OrderId, ProductDraft, ProductId, ShippingDetails};

use crate::error::Result;
use crate::services::admin;
use crate::state::AppState;

use super::cart::CartLineView;
use super::products::ProductView;

/// Unshipped order display data.
#[derive(Debug, Clone, Serialize)]
pub struct OrderView {
    pub id: Option<OrderId>,
    pub shipping: ShippingDetails,
    pub lines: Vec<CartLineView>,
    pub total: Decimal,
    pub shipped: bool,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            shipping: order.shipping.clone(),
            lines: order.lines.iter().map(CartLineView::from).collect(),
            total: order.total(),
            shipped: order.shipped,
        }
    }
}

/// Every product in the catalog.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<ProductView>>> {
    let products = admin::index(&state.products()).await?;
    Ok(Json(products.iter().map(ProductView::from).collect()))
}

/// The editable fields of one product.
#[instrument(skip(state))]
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<ProductDraft>> {
    let product = admin::edit(&state.products(), id).await?;
    Ok(Json(ProductDraft::from(&product)))
}

/// Create a product, or update it when the draft carries an ID.
#[instrument(skip(state))]
pub async fn save(
    State(state): State<AppState>,
    Json(draft): Json<ProductDraft>,
) -> Result<impl IntoResponse> {
    let status = if draft.existing_id().is_some() {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };

    let saved = admin::save(&state.products(), &draft).await?;
    Ok((status, Json(ProductView::from(&saved))))
}

/// Delete a product.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<ProductView>> {
    let deleted = admin::delete(&state.products(), id).await?;
    Ok(Json(ProductView::from(&deleted)))
}

/// Orders waiting to be shipped.
#[instrument(skip(state))]
pub async fn orders(State(state): State<AppState>) -> Result<Json<Vec<OrderView>>> {
    let orders = admin::unshipped_orders(&state.orders()).await?;
    Ok(Json(orders.iter().map(OrderView::from).collect()))
}

/// Flag an order as shipped.
#[instrument(skip(state))]
pub async fn ship(State(state): State<AppState>, Path(id): Path<OrderId>) -> Result<StatusCode> {
    admin::mark_shipped(&state.orders(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
