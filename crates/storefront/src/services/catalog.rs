//! Product listing service.

use tracing::instrument;

use sports_store_core::catalog;
use sports_store_core::ProductPage;

use crate::db::{ProductRepository, RepositoryError};

/// A catalog page together with the navigation menu's categories.
#[derive(Debug, Clone)]
pub struct CatalogListing {
    pub page: ProductPage,
    pub categories: Vec<String>,
}

/// Load the catalog and compute one page of it.
///
/// A blank `category` means no filter; a `page` of zero is treated as the
/// first page.
///
/// # Errors
///
/// Returns `RepositoryError` if the products cannot be loaded.
#[instrument(skip(products))]
pub async fn list_products<R: ProductRepository>(
    products: &R,
    category: Option<&str>,
    page: u32,
    page_size: u32,
) -> Result<CatalogListing, RepositoryError> {
    let all = products.list_products().await?;
    let category = category.map(str::trim).filter(|c| !c.is_empty());

    Ok(CatalogListing {
        page: catalog::query(&all, category, page.max(1), page_size),
        categories: catalog::categories(&all),
    })
}

/// Distinct product categories, sorted.
///
/// # Errors
///
/// Returns `RepositoryError` if the products cannot be loaded.
pub async fn list_categories<R: ProductRepository>(
    products: &R,
) -> Result<Vec<String>, RepositoryError> {
    let all = products.list_products().await?;
    Ok(catalog::categories(&all))
}
