//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::StoreConfig;
use crate::db::{PgOrderRepository, PgProductRepository};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like database connections and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StoreConfig,
    pool: PgPool,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Store configuration
    /// * `pool` - `PostgreSQL` connection pool
    #[must_use]
    pub fn new(config: StoreConfig, pool: PgPool) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, pool }),
        }
    }

    /// Get a reference to the store configuration.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Catalog repository backed by the shared pool.
    #[must_use]
    pub fn products(&self) -> PgProductRepository<'_> {
        PgProductRepository::new(&self.inner.pool)
    }

    /// Order repository backed by the shared pool.
    #[must_use]
    pub fn orders(&self) -> PgOrderRepository<'_> {
        PgOrderRepository::new(&self.inner.pool)
    }
}
