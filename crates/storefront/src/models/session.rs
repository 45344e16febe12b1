//! Session-related types.
//!
//! The visitor's cart lives in the session so it survives between requests
//! without an account.

/// Session keys for storefront data.
pub mod keys {
    /// Key for storing the visitor's shopping cart.
    pub const CART: &str = "cart";
}
