//! Product repository backed by `PostgreSQL`.

use sqlx::PgPool;
use tracing::{debug, instrument};

use sports_store_core::product::ValidProduct;
use sports_store_core::{Product, ProductId};

use super::{ProductRepository, RepositoryError};

/// Repository for catalog database operations.
#[derive(Clone, Copy)]
pub struct PgProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PgProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Number of products in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM store.product")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}

impl ProductRepository for PgProductRepository<'_> {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, description, price, category
            FROM store.product
            ORDER BY id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        debug!(count = products.len(), "Loaded products");
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn find_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, description, price, category
            FROM store.product
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }

    #[instrument(skip(self, product), fields(id = ?product.id, name = %product.name))]
    async fn save_product(&self, product: &ValidProduct) -> Result<Product, RepositoryError> {
        let saved = match product.id {
            Some(id) => sqlx::query_as::<_, Product>(
                r"
                UPDATE store.product
                SET name = $2, description = $3, price = $4, category = $5, updated_at = NOW()
                WHERE id = $1
                RETURNING id, name, description, price, category
                ",
            )
            .bind(id)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(&product.category)
            .fetch_optional(self.pool)
            .await?
            .ok_or(RepositoryError::NotFound)?,
            None => {
                sqlx::query_as::<_, Product>(
                    r"
                    INSERT INTO store.product (name, description, price, category)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id, name, description, price, category
                    ",
                )
                .bind(&product.name)
                .bind(&product.description)
                .bind(product.price)
                .bind(&product.category)
                .fetch_one(self.pool)
                .await?
            }
        };

        debug!(id = %saved.id, "Saved product");
        Ok(saved)
    }

    #[instrument(skip(self))]
    async fn delete_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let deleted = sqlx::query_as::<_, Product>(
            r"
            DELETE FROM store.product
            WHERE id = $1
            RETURNING id, name, description, price, category
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(deleted)
    }
}
