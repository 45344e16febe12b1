//! CLI subcommands.

pub mod migrate;
pub mod seed;

use thiserror::Error;

use sports_store_storefront::config::{ConfigError, database_url_from_env};
use sports_store_storefront::db::{self, RepositoryError};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Invalid sample product {0}: {1}")]
    InvalidSample(String, String),
}

/// Connect to the store database named by the environment.
async fn connect() -> Result<sqlx::PgPool, CommandError> {
    let database_url = database_url_from_env()?;

    tracing::info!("Connecting to store database...");
    Ok(db::create_pool(&database_url).await?)
}
