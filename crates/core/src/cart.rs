//! Shopping cart aggregation.
//!
//! A [`Cart`] holds at most one [`CartLine`] per product; adding a product that
//! is already in the cart increases that line's quantity. The cart is a plain
//! value: the storefront loads it from the visitor's session, mutates it and
//! writes it back.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::order::{Order, ShippingDetails};
use crate::product::Product;
use crate::types::ProductId;

/// A product and the quantity of it in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Price of the line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * self.quantity
    }
}

/// An ordered collection of cart lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of `product`, merging with an existing line for it.
    ///
    /// A quantity of zero leaves the cart unchanged.
    pub fn add_item(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }

        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine { product, quantity }),
        }
    }

    /// Remove the line for `product_id`, if any.
    pub fn remove_line(&mut self, product_id: ProductId) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    /// Set the quantity of an existing line. Zero removes the line.
    ///
    /// Products that are not in the cart are ignored.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_line(product_id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Sum of price times quantity across all lines.
    #[must_use]
    pub fn compute_total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The cart's lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0_u32, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Snapshot the cart into an unsaved order.
    ///
    /// The cart itself is left untouched; callers clear it once the order
    /// has been saved.
    #[must_use]
    pub fn to_order(&self, shipping: ShippingDetails) -> Order {
        Order {
            id: None,
            shipping,
            lines: self.lines.clone(),
            shipped: false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::Price;

    fn product(id: i32, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("P{id}"),
            description: String::new(),
            price: Price::new(Decimal::from(price)).unwrap_or_default(),
            category: "Cat".to_owned(),
        }
    }

    #[test]
    fn test_can_add_new_lines() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 100), 1);
        cart.add_item(product(2, 50), 1);

        let lines = cart.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].product.id, ProductId::new(1));
        assert_eq!(lines[1].product.id, ProductId::new(2));
    }

    #[test]
    fn test_can_add_quantity_for_existing_lines() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 100), 2);
        cart.add_item(product(2, 50), 1);
        cart.add_item(product(1, 100), 3);

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.lines()[1].quantity, 1);
    }

    #[test]
    fn test_adding_zero_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 100), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_can_remove_line() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 100), 1);
        cart.add_item(product(2, 50), 3);
        cart.add_item(product(3, 10), 1);

        cart.remove_line(ProductId::new(2));

        assert_eq!(cart.lines().len(), 2);
        assert!(cart.lines().iter().all(|l| l.product.id != ProductId::new(2)));
    }

    #[test]
    fn test_remove_missing_line_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 100), 2);
        let before = cart.clone();

        cart.remove_line(ProductId::new(99));

        assert_eq!(cart, before);
    }

    #[test]
    fn test_calculate_cart_total() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 100), 1);
        cart.add_item(product(2, 50), 1);
        cart.add_item(product(1, 100), 3);

        assert_eq!(cart.compute_total(), Decimal::from(450));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 100), 1);
        cart.add_item(product(2, 50), 1);

        cart.update_quantity(ProductId::new(1), 4);
        cart.update_quantity(ProductId::new(7), 4);
        assert_eq!(cart.lines()[0].quantity, 4);
        assert_eq!(cart.lines().len(), 2);

        cart.update_quantity(ProductId::new(2), 0);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_can_clear_contents() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 100), 1);
        cart.add_item(product(2, 50), 1);

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.compute_total(), Decimal::ZERO);
    }

    #[test]
    fn test_to_order_snapshots_lines() {
        let mut cart = Cart::new();
        cart.add_item(product(1, 100), 2);

        let order = cart.to_order(ShippingDetails::default());
        cart.clear();

        assert_eq!(order.lines.len(), 1);
        assert_eq!(order.lines[0].quantity, 2);
        assert!(!order.shipped);
        assert!(order.id.is_none());
    }
}
