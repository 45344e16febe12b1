//! Order repository backed by `PostgreSQL`.
//!
//! Order lines store a copy of the product as it was when the order was
//! placed, so later catalog edits or deletions do not change past orders.

use std::collections::HashMap;

use sqlx::{FromRow, PgPool};
use tracing::{debug, instrument};

use sports_store_core::{CartLine, Order, OrderId, Price, Product, ProductId, ShippingDetails};

use super::{OrderRepository, RepositoryError};

/// Repository for order database operations.
#[derive(Clone, Copy)]
pub struct PgOrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PgOrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct OrderRow {
    id: OrderId,
    name: String,
    line1: String,
    line2: Option<String>,
    line3: Option<String>,
    city: String,
    state: String,
    zip: Option<String>,
    country: String,
    shipped: bool,
}

#[derive(FromRow)]
struct OrderLineRow {
    order_id: OrderId,
    product_id: ProductId,
    product_name: String,
    product_description: String,
    product_category: String,
    unit_price: Price,
    quantity: i32,
}

impl OrderLineRow {
    fn into_line(self) -> Result<CartLine, RepositoryError> {
        let quantity = u32::try_from(self.quantity).map_err(|_| {
            RepositoryError::DataCorruption(format!(
                "order {} has negative quantity {}",
                self.order_id, self.quantity
            ))
        })?;

        Ok(CartLine {
            product: Product {
                id: self.product_id,
                name: self.product_name,
                description: self.product_description,
                price: self.unit_price,
                category: self.product_category,
            },
            quantity,
        })
    }
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Self {
            id: Some(row.id),
            shipping: ShippingDetails {
                name: row.name,
                line1: row.line1,
                line2: row.line2,
                line3: row.line3,
                city: row.city,
                state: row.state,
                zip: row.zip,
                country: row.country,
            },
            lines: Vec::new(),
            shipped: row.shipped,
        }
    }
}

impl OrderRepository for PgOrderRepository<'_> {
    #[instrument(skip(self, order), fields(lines = order.lines.len()))]
    async fn save_order(&self, order: &Order) -> Result<OrderId, RepositoryError> {
        let mut tx = self.pool.begin().await?;
        let shipping = &order.shipping;

        let id: OrderId = sqlx::query_scalar(
            r"
            INSERT INTO store.customer_order
                (name, line1, line2, line3, city, state, zip, country, shipped)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            ",
        )
        .bind(&shipping.name)
        .bind(&shipping.line1)
        .bind(&shipping.line2)
        .bind(&shipping.line3)
        .bind(&shipping.city)
        .bind(&shipping.state)
        .bind(&shipping.zip)
        .bind(&shipping.country)
        .bind(order.shipped)
        .fetch_one(&mut *tx)
        .await?;

        for (position, line) in order.lines.iter().enumerate() {
            let quantity = i32::try_from(line.quantity).map_err(|_| {
                RepositoryError::DataCorruption(format!("quantity {} out of range", line.quantity))
            })?;
            let position = i32::try_from(position).map_err(|_| {
                RepositoryError::DataCorruption(format!("line position {position} out of range"))
            })?;

            sqlx::query(
                r"
                INSERT INTO store.order_line
                    (order_id, position, product_id, product_name, product_description,
                     product_category, unit_price, quantity)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                ",
            )
            .bind(id)
            .bind(position)
            .bind(line.product.id)
            .bind(&line.product.name)
            .bind(&line.product.description)
            .bind(&line.product.category)
            .bind(line.product.price)
            .bind(quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        debug!(%id, "Saved order");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn list_unshipped(&self) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r"
            SELECT id, name, line1, line2, line3, city, state, zip, country, shipped
            FROM store.customer_order
            WHERE shipped = FALSE
            ORDER BY id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = rows.iter().map(|r| r.id.as_i32()).collect();
        let line_rows = sqlx::query_as::<_, OrderLineRow>(
            r"
            SELECT order_id, product_id, product_name, product_description,
                   product_category, unit_price, quantity
            FROM store.order_line
            WHERE order_id = ANY($1)
            ORDER BY order_id ASC, position ASC
            ",
        )
        .bind(&ids)
        .fetch_all(self.pool)
        .await?;

        let mut lines_by_order: HashMap<OrderId, Vec<CartLine>> = HashMap::new();
        for row in line_rows {
            let order_id = row.order_id;
            lines_by_order
                .entry(order_id)
                .or_default()
                .push(row.into_line()?);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let mut order = Order::from(row);
                if let Some(id) = order.id {
                    order.lines = lines_by_order.remove(&id).unwrap_or_default();
                }
                order
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn mark_shipped(&self, id: OrderId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE store.customer_order
            SET shipped = TRUE, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
