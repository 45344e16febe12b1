//! Orders and the shipping details collected at checkout.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::CartLine;
use crate::types::OrderId;
use crate::validation::ValidationErrors;

/// Where an order should be shipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingDetails {
    pub name: String,
    pub line1: String,
    pub line2: Option<String>,
    pub line3: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: Option<String>,
    pub country: String,
}

impl ShippingDetails {
    /// Check that every required field is filled in.
    ///
    /// # Errors
    ///
    /// Returns the missing fields as a [`ValidationErrors`].
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name, "Please enter a name");
        errors.require("line1", &self.line1, "Please enter the first address line");
        errors.require("city", &self.city, "Please enter a city name");
        errors.require("state", &self.state, "Please enter a state name");
        errors.require("country", &self.country, "Please enter a country name");
        errors.into_result()
    }
}

/// An order placed from a cart.
///
/// `id` is `None` until the order has been saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: Option<OrderId>,
    pub shipping: ShippingDetails,
    pub lines: Vec<CartLine>,
    pub shipped: bool,
}

impl Order {
    /// Sum of the order's line totals.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn details() -> ShippingDetails {
        ShippingDetails {
            name: "Joe Smith".to_owned(),
            line1: "1 Main Street".to_owned(),
            city: "Springfield".to_owned(),
            state: "IL".to_owned(),
            country: "USA".to_owned(),
            ..ShippingDetails::default()
        }
    }

    #[test]
    fn test_complete_details_are_valid() {
        assert!(details().validate().is_ok());
    }

    #[test]
    fn test_optional_lines_may_be_blank() {
        let mut d = details();
        d.line2 = Some(String::new());
        d.zip = None;
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_missing_required_fields() {
        let errors = ShippingDetails::default().validate().unwrap_err();
        for field in ["name", "line1", "city", "state", "country"] {
            assert!(!errors.field(field).is_empty(), "{field} should be required");
        }
        assert!(errors.field("zip").is_empty());
    }

    #[test]
    fn test_whitespace_is_blank() {
        let mut d = details();
        d.city = "  ".to_owned();
        let errors = d.validate().unwrap_err();
        assert_eq!(errors.field("city"), ["Please enter a city name"]);
    }
}
