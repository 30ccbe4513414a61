//! Order repository.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use solemate_core::{NewOrder, Order, OrderId};

use super::{RepositoryError, parse_price};

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i32,
    price: String,
    quantity: i32,
    time_ordered: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = RepositoryError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: OrderId::new(row.id),
            price: parse_price(&row.price)?,
            quantity: row.quantity,
            time_ordered: row.time_ordered,
        })
    }
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all orders, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            "SELECT id, price, quantity, time_ordered FROM orders ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Order::try_from).collect()
    }

    /// Get an order by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(
            "SELECT id, price, quantity, time_ordered FROM orders WHERE id = ?",
        )
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        row.map(Order::try_from).transpose()
    }

    /// Record an order, stamping the current time when none is given.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &NewOrder) -> Result<Order, RepositoryError> {
        let time_ordered = input.time_ordered.unwrap_or_else(Utc::now);

        let row = sqlx::query_as::<_, OrderRow>(
            "INSERT INTO orders (price, quantity, time_ordered) VALUES (?, ?, ?) \
             RETURNING id, price, quantity, time_ordered",
        )
        .bind(input.price.to_string())
        .bind(input.quantity)
        .bind(time_ordered)
        .fetch_one(self.pool)
        .await?;

        Order::try_from(row)
    }

    /// Correct an order's price, quantity or timestamp.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no order has this ID.
    pub async fn update(&self, id: OrderId, input: &NewOrder) -> Result<Order, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(
            "UPDATE orders SET price = ?, quantity = ?, time_ordered = COALESCE(?, time_ordered) \
             WHERE id = ? \
             RETURNING id, price, quantity, time_ordered",
        )
        .bind(input.price.to_string())
        .bind(input.quantity)
        .bind(input.time_ordered)
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        row.ok_or(RepositoryError::NotFound).and_then(Order::try_from)
    }

    /// Delete an order. Shipping info attached to it is kept but detached.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no order has this ID.
    pub async fn delete(&self, id: OrderId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id.as_i32())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    use super::*;
    use crate::db::create_memory_pool;

    #[tokio::test]
    async fn test_create_keeps_given_timestamp() {
        let pool = create_memory_pool().await.unwrap();
        let repo = OrderRepository::new(&pool);

        let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap();
        let order = repo
            .create(&NewOrder {
                price: Decimal::new(157_000, 2),
                quantity: 2,
                time_ordered: Some(at),
            })
            .await
            .unwrap();

        assert_eq!(order.time_ordered, at);
        assert_eq!(order.price, Decimal::new(157_000, 2));

        let reloaded = repo.get(order.id).await.unwrap().unwrap();
        assert_eq!(reloaded, order);
    }

    #[tokio::test]
    async fn test_create_stamps_now() {
        let pool = create_memory_pool().await.unwrap();
        let repo = OrderRepository::new(&pool);

        let before = Utc::now();
        let order = repo
            .create(&NewOrder {
                price: Decimal::new(70, 0),
                quantity: 1,
                time_ordered: None,
            })
            .await
            .unwrap();

        assert!(order.time_ordered >= before);
    }
}
