//! Types stored outside the database.

pub mod session;

pub use session::keys as session_keys;
