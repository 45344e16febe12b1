//! Sports Store Core - Catalog, cart and order types.
//!
//! This crate provides the domain logic shared by the Sports Store binaries:
//! - `storefront` - Public catalog, cart, checkout and the admin screens
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP. Repositories and session storage live in the storefront
//! crate and hand plain values to the functions defined here.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices
//! - [`product`] - Products and admin product drafts
//! - [`catalog`] - Category filtering and pagination of product listings
//! - [`cart`] - Shopping cart line aggregation
//! - [`order`] - Shipping details and order payloads
//! - [`validation`] - Field-level validation errors

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod order;
pub mod product;
pub mod types;
pub mod validation;

pub use cart::{Cart, CartLine};
pub use catalog::{PagingInfo, ProductPage};
pub use order::{Order, ShippingDetails};
pub use product::{Product, ProductDraft};
pub use types::*;
pub use validation::ValidationErrors;
