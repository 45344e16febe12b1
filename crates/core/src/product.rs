//! Catalog products and admin product drafts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};
use crate::validation::ValidationErrors;

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: String,
}

/// A product as submitted from the admin edit form.
///
/// `id` is `None` (or zero, which the HTML form posts for new products) when
/// the product has not been persisted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    #[serde(default)]
    pub id: Option<ProductId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub category: String,
}

/// A draft that passed validation and is ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProduct {
    pub id: Option<ProductId>,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: String,
}

impl ProductDraft {
    /// The persisted ID, treating zero as "not yet saved".
    #[must_use]
    pub fn existing_id(&self) -> Option<ProductId> {
        self.id.filter(|id| id.as_i32() != 0)
    }

    /// Validate the draft.
    ///
    /// Name, description and category are required; the price must not be
    /// negative. Text fields are trimmed.
    ///
    /// # Errors
    ///
    /// Returns every failed rule as a [`ValidationErrors`].
    pub fn validate(&self) -> Result<ValidProduct, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name, "Please enter a product name");
        errors.require("description", &self.description, "Please enter a description");
        errors.require("category", &self.category, "Please specify a category");

        let price = Price::new(self.price);
        if price.is_err() {
            errors.add("price", "Please enter a positive price");
        }

        errors.into_result()?;

        Ok(ValidProduct {
            id: self.existing_id(),
            name: self.name.trim().to_owned(),
            description: self.description.trim().to_owned(),
            price: price.unwrap_or_default(),
            category: self.category.trim().to_owned(),
        })
    }
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.amount(),
            category: product.category.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft {
            id: None,
            name: "Kayak".to_owned(),
            description: "A boat for one person".to_owned(),
            price: Decimal::new(275, 0),
            category: "Watersports".to_owned(),
        }
    }

    #[test]
    fn test_valid_draft() {
        let valid = draft().validate().unwrap();
        assert_eq!(valid.id, None);
        assert_eq!(valid.price.amount(), Decimal::new(275, 0));
    }

    #[test]
    fn test_zero_id_is_new() {
        let mut d = draft();
        d.id = Some(ProductId::new(0));
        assert_eq!(d.validate().unwrap().id, None);

        d.id = Some(ProductId::new(3));
        assert_eq!(d.validate().unwrap().id, Some(ProductId::new(3)));
    }

    #[test]
    fn test_missing_fields_reported_together() {
        let errors = ProductDraft {
            price: Decimal::new(-1, 0),
            ..ProductDraft::default()
        }
        .validate()
        .unwrap_err();

        assert!(!errors.field("name").is_empty());
        assert!(!errors.field("description").is_empty());
        assert!(!errors.field("category").is_empty());
        assert!(!errors.field("price").is_empty());
    }

    #[test]
    fn test_trims_text() {
        let mut d = draft();
        d.category = "  Chess ".to_owned();
        assert_eq!(d.validate().unwrap().category, "Chess");
    }
}
