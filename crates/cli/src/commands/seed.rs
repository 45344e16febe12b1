//! Load the sample catalog.

use rust_decimal::Decimal;

use sports_store_core::ProductDraft;
use sports_store_storefront::db::{PgProductRepository, ProductRepository};

use super::{CommandError, connect};

/// Sample products: name, description, category, price in cents.
const SAMPLE_PRODUCTS: &[(&str, &str, &str, i64)] = &[
    ("Kayak", "A boat for one person", "Watersports", 27_500),
    ("Lifejacket", "Protective and fashionable", "Watersports", 4_895),
    ("Soccer Ball", "FIFA-approved size and weight", "Soccer", 1_950),
    (
        "Corner Flags",
        "Give your playing field a professional touch",
        "Soccer",
        3_495,
    ),
    ("Stadium", "Flat-packed 35,000-seat stadium", "Soccer", 7_950_000),
    ("Thinking Cap", "Improve brain efficiency by 75%", "Chess", 1_600),
    (
        "Unsteady Chair",
        "Secretly give your opponent a disadvantage",
        "Chess",
        2_995,
    ),
    ("Human Chess Board", "A fun game for the family", "Chess", 7_500),
    (
        "Bling-Bling King",
        "Gold-plated, diamond-studded King",
        "Chess",
        120_000,
    ),
];

/// The sample catalog as unsaved product drafts.
fn sample_drafts() -> impl Iterator<Item = ProductDraft> {
    SAMPLE_PRODUCTS
        .iter()
        .map(|&(name, description, category, cents)| ProductDraft {
            id: None,
            name: name.to_owned(),
            description: description.to_owned(),
            price: Decimal::new(cents, 2),
            category: category.to_owned(),
        })
}

/// Insert the sample products.
///
/// Skips seeding when the catalog already has products, unless `force` is set.
///
/// # Errors
///
/// Returns an error if the database is unreachable or an insert fails.
pub async fn run(force: bool) -> Result<(), CommandError> {
    let pool = connect().await?;
    let products = PgProductRepository::new(&pool);

    let existing = products.count().await?;
    if existing > 0 && !force {
        tracing::info!(existing, "Catalog is not empty, skipping seed");
        return Ok(());
    }

    for draft in sample_drafts() {
        let valid = draft
            .validate()
            .map_err(|e| CommandError::InvalidSample(draft.name.clone(), e.to_string()))?;
        let saved = products.save_product(&valid).await?;
        tracing::info!(id = %saved.id, name = %saved.name, "Seeded product");
    }

    tracing::info!(count = SAMPLE_PRODUCTS.len(), "Seed complete!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_products_are_valid() {
        for draft in sample_drafts() {
            assert!(draft.validate().is_ok(), "{} should validate", draft.name);
        }
    }

    #[test]
    fn test_sample_catalog_spans_three_categories() {
        let mut categories: Vec<String> = sample_drafts().map(|d| d.category).collect();
        categories.sort();
        categories.dedup();
        assert_eq!(categories, ["Chess", "Soccer", "Watersports"]);
    }
}
