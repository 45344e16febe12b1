//! Admin product management and order fulfilment.

use thiserror::Error;
use tracing::{info, instrument, warn};

use sports_store_core::{Order, OrderId, Product, ProductDraft, ProductId, ValidationErrors};

use crate::db::{OrderRepository, ProductRepository, RepositoryError};

/// Errors that can occur in admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The submitted product failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The product or order does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for AdminError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound("record".to_owned()),
            other => Self::Repository(other),
        }
    }
}

/// Every product, ordered by ID.
///
/// # Errors
///
/// Returns `AdminError::Repository` if the products cannot be loaded.
pub async fn index<R: ProductRepository>(products: &R) -> Result<Vec<Product>, AdminError> {
    Ok(products.list_products().await?)
}

/// The product to edit.
///
/// # Errors
///
/// Returns `AdminError::NotFound` if no product has this ID.
pub async fn edit<R: ProductRepository>(products: &R, id: ProductId) -> Result<Product, AdminError> {
    products
        .find_product(id)
        .await?
        .ok_or_else(|| AdminError::NotFound(format!("product {id}")))
}

/// Validate and save a product draft.
///
/// Nothing is written when validation fails.
///
/// # Errors
///
/// Returns `AdminError::Validation` for an invalid draft, `AdminError::NotFound`
/// when updating a product that no longer exists.
#[instrument(skip(products, draft), fields(id = ?draft.id))]
pub async fn save<R: ProductRepository>(
    products: &R,
    draft: &ProductDraft,
) -> Result<Product, AdminError> {
    let valid = draft.validate().inspect_err(|errors| {
        warn!(%errors, "Product rejected");
    })?;

    let saved = products.save_product(&valid).await.map_err(|e| match e {
        RepositoryError::NotFound => AdminError::NotFound(format!(
            "product {}",
            valid.id.map_or_else(String::new, |id| id.to_string())
        )),
        other => AdminError::Repository(other),
    })?;

    info!(id = %saved.id, name = %saved.name, "Product saved");
    Ok(saved)
}

/// Delete a product.
///
/// # Errors
///
/// Returns `AdminError::NotFound` if no product has this ID.
#[instrument(skip(products))]
pub async fn delete<R: ProductRepository>(
    products: &R,
    id: ProductId,
) -> Result<Product, AdminError> {
    let deleted = products
        .delete_product(id)
        .await?
        .ok_or_else(|| AdminError::NotFound(format!("product {id}")))?;

    info!(id = %deleted.id, name = %deleted.name, "Product deleted");
    Ok(deleted)
}

/// Orders waiting to be shipped.
///
/// # Errors
///
/// Returns `AdminError::Repository` if the orders cannot be loaded.
pub async fn unshipped_orders<R: OrderRepository>(orders: &R) -> Result<Vec<Order>, AdminError> {
    Ok(orders.list_unshipped().await?)
}

/// Flag an order as shipped.
///
/// # Errors
///
/// Returns `AdminError::NotFound` if no order has this ID.
#[instrument(skip(orders))]
pub async fn mark_shipped<R: OrderRepository>(orders: &R, id: OrderId) -> Result<(), AdminError> {
    if orders.mark_shipped(id).await? {
        info!(order_id = %id, "Order shipped");
        Ok(())
    } else {
        Err(AdminError::NotFound(format!("order {id}")))
    }
}
