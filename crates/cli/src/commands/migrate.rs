//! Database migration command.
//!
//! Migrations live in `crates/storefront/migrations/`; the session table is
//! created by `tower-sessions-sqlx-store`.

use tower_sessions_sqlx_store::PostgresStore;

use super::{CommandError, connect};

/// Run the store schema migrations and create the session table.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    tracing::info!("Running store migrations...");
    sqlx::migrate!("../storefront/migrations").run(&pool).await?;

    tracing::info!("Creating session table...");
    PostgresStore::new(pool.clone()).migrate().await?;

    tracing::info!("Store migrations complete!");
    Ok(())
}
