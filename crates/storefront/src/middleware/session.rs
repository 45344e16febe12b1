//! Session middleware configuration.
//!
//! Sets up `PostgreSQL`-backed sessions using tower-sessions.

use sqlx::PgPool;
use tower_sessions::{Expiry, SessionManagerLayer, SessionStore};
use tower_sessions_sqlx_store::PostgresStore;

use crate::config::StoreConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "ss_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Create the session layer with `PostgreSQL` store.
///
/// # Arguments
///
/// * `pool` - `PostgreSQL` connection pool
/// * `config` - Store configuration (decides whether cookies are HTTPS-only)
#[must_use]
pub fn create_session_layer(
    pool: &PgPool,
    config: &StoreConfig,
) -> SessionManagerLayer<PostgresStore> {
    // The sessions table is created by `ss-cli migrate`
    let store = PostgresStore::new(pool.clone());
    session_layer_with_store(store, config.is_secure())
}

/// Create a session layer over any store, with the storefront cookie settings.
#[must_use]
pub fn session_layer_with_store<S: SessionStore>(store: S, secure: bool) -> SessionManagerLayer<S> {
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(secure)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
