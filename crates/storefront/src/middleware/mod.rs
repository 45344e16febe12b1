//! HTTP middleware stack for the store.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (`tower-http` assigns and echoes it, Sentry scope tag)
//! 4. Session layer (tower-sessions with `PostgreSQL` store)
//!
//! The session-backed cart helpers live here too, next to the layer that
//! makes the session available.

pub mod cart;
pub mod request_id;
pub mod session;

pub use cart::{clear_cart, load_cart, store_cart};
pub use request_id::{
    propagate_request_id_layer, sentry_request_id_middleware, set_request_id_layer,
};
pub use session::{create_session_layer, session_layer_with_store};
