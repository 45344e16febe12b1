//! Product listing handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use sports_store_core::{PagingInfo, Product, ProductId};

use crate::error::Result;
use crate::services::catalog;
use crate::state::AppState;

/// Product display data.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: Decimal,
    /// Price formatted for display, e.g. `$275.00`.
    pub display_price: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            price: product.price.amount(),
            display_price: product.price.to_string(),
        }
    }
}

/// Paging links for the listing.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PagingView {
    pub current_page: u32,
    pub items_per_page: u32,
    pub total_items: u32,
    pub total_pages: u32,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl From<PagingInfo> for PagingView {
    fn from(paging: PagingInfo) -> Self {
        Self {
            current_page: paging.current_page,
            items_per_page: paging.items_per_page,
            total_items: paging.total_items,
            total_pages: paging.total_pages(),
            has_next_page: paging.has_next_page(),
            has_previous_page: paging.has_previous_page(),
        }
    }
}

/// Product listing response.
#[derive(Debug, Clone, Serialize)]
pub struct ProductListView {
    pub products: Vec<ProductView>,
    pub paging: PagingView,
    pub current_category: Option<String>,
    pub categories: Vec<String>,
}

/// Listing query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    pub page: Option<u32>,
}

/// One page of the catalog, optionally filtered to a category.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ProductListView>> {
    let listing = catalog::list_products(
        &state.products(),
        query.category.as_deref(),
        query.page.unwrap_or(1),
        state.config().page_size,
    )
    .await?;

    Ok(Json(ProductListView {
        products: listing.page.products.iter().map(ProductView::from).collect(),
        paging: listing.page.paging.into(),
        current_category: listing.page.current_category,
        categories: listing.categories,
    }))
}

/// Categories for the navigation menu.
#[instrument(skip(state))]
pub async fn categories(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    Ok(Json(catalog::list_categories(&state.products()).await?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use sports_store_core::Price;

    use super::*;

    #[test]
    fn test_product_view_formats_price() {
        let product = Product {
            id: ProductId::new(3),
            name: "Soccer Ball".to_owned(),
            description: "FIFA-approved size and weight".to_owned(),
            price: Price::new(Decimal::new(1950, 2)).unwrap(),
            category: "Soccer".to_owned(),
        };

        let view = ProductView::from(&product);

        assert_eq!(view.display_price, "$19.50");
        assert_eq!(view.price, Decimal::new(1950, 2));
    }

    #[test]
    fn test_paging_view_derives_links() {
        let view = PagingView::from(PagingInfo {
            current_page: 2,
            items_per_page: 4,
            total_items: 9,
        });

        assert_eq!(view.total_pages, 3);
        assert!(view.has_next_page);
        assert!(view.has_previous_page);
    }
}
