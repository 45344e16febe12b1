//! Business logic services for the store.
//!
//! Services sit between the HTTP handlers and the repositories. They are
//! generic over the repository traits so they can run against `PostgreSQL` in
//! production and in-memory fakes in tests.
//!
//! # Services
//!
//! - `catalog` - Paginated, category-filtered product listings
//! - `cart` - Adding catalog products to the session cart
//! - `checkout` - Order submission from the session cart
//! - `admin` - Product management and order fulfilment

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod checkout;
