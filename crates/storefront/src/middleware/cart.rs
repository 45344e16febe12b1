//! Session-backed shopping cart.
//!
//! Handlers load the cart at the start of a request, mutate their own copy,
//! and write it back before responding.

use tower_sessions::Session;
use tower_sessions::session::Error as SessionError;

use sports_store_core::Cart;

use crate::models::session_keys;

/// Load the visitor's cart, or an empty cart if they have none yet.
///
/// # Errors
///
/// Returns an error if the session store cannot be read or the stored cart
/// cannot be decoded.
pub async fn load_cart(session: &Session) -> Result<Cart, SessionError> {
    Ok(session
        .get::<Cart>(session_keys::CART)
        .await?
        .unwrap_or_default())
}

/// Write the visitor's cart back to the session.
///
/// # Errors
///
/// Returns an error if the session store cannot be written.
pub async fn store_cart(session: &Session, cart: &Cart) -> Result<(), SessionError> {
    session.insert(session_keys::CART, cart).await
}

/// Remove the visitor's cart from the session.
///
/// # Errors
///
/// Returns an error if the session store cannot be written.
pub async fn clear_cart(session: &Session) -> Result<(), SessionError> {
    session.remove::<Cart>(session_keys::CART).await?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;
    use sports_store_core::{Price, Product, ProductId};
    use tower_sessions::MemoryStore;

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    fn kayak() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Kayak".to_owned(),
            description: "A boat for one person".to_owned(),
            price: Price::new(Decimal::new(275, 0)).unwrap(),
            category: "Watersports".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_missing_cart_loads_empty() {
        let cart = load_cart(&session()).await.unwrap();
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_stored_cart_round_trips() {
        let session = session();
        let mut cart = Cart::new();
        cart.add_item(kayak(), 2);

        store_cart(&session, &cart).await.unwrap();

        assert_eq!(load_cart(&session).await.unwrap(), cart);
    }

    #[tokio::test]
    async fn test_clear_cart_empties_session() {
        let session = session();
        let mut cart = Cart::new();
        cart.add_item(kayak(), 1);
        store_cart(&session, &cart).await.unwrap();

        clear_cart(&session).await.unwrap();

        assert!(load_cart(&session).await.unwrap().is_empty());
    }
}
