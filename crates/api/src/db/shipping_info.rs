//! Shipping info repository.

use sqlx::SqlitePool;

use solemate_core::{NewShippingInfo, OrderId, ShippingInfo, ShippingInfoId};

use super::RepositoryError;

const COLUMNS: &str = "id, full_name, street, city, state, zip, order_id";

#[derive(sqlx::FromRow)]
struct ShippingInfoRow {
    id: i32,
    full_name: String,
    street: String,
    city: String,
    state: String,
    zip: String,
    order_id: Option<i32>,
}

impl From<ShippingInfoRow> for ShippingInfo {
    fn from(row: ShippingInfoRow) -> Self {
        Self {
            id: ShippingInfoId::new(row.id),
            full_name: row.full_name,
            street: row.street,
            city: row.city,
            state: row.state,
            zip: row.zip,
            order_id: row.order_id.map(OrderId::new),
        }
    }
}

/// Repository for shipping info database operations.
pub struct ShippingInfoRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ShippingInfoRepository<'a> {
    /// Create a new shipping info repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all shipping info records.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<ShippingInfo>, RepositoryError> {
        let rows = sqlx::query_as::<_, ShippingInfoRow>(&format!(
            "SELECT {COLUMNS} FROM shipping_info ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(ShippingInfo::from).collect())
    }

    /// Get shipping info by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ShippingInfoId) -> Result<Option<ShippingInfo>, RepositoryError> {
        let row = sqlx::query_as::<_, ShippingInfoRow>(&format!(
            "SELECT {COLUMNS} FROM shipping_info WHERE id = ?"
        ))
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(ShippingInfo::from))
    }

    /// Create shipping info.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InvalidReference` if the order does not exist.
    pub async fn create(&self, input: &NewShippingInfo) -> Result<ShippingInfo, RepositoryError> {
        let row = sqlx::query_as::<_, ShippingInfoRow>(&format!(
            "INSERT INTO shipping_info (full_name, street, city, state, zip, order_id) \
             VALUES (?, ?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        ))
        .bind(&input.full_name)
        .bind(&input.street)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.zip)
        .bind(input.order_id.map(|o| o.as_i32()))
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_write(e, "duplicate shipping info", "unknown order"))?;

        Ok(row.into())
    }

    /// Replace shipping info fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no record has this ID.
    pub async fn update(
        &self,
        id: ShippingInfoId,
        input: &NewShippingInfo,
    ) -> Result<ShippingInfo, RepositoryError> {
        let row = sqlx::query_as::<_, ShippingInfoRow>(&format!(
            "UPDATE shipping_info SET \
                 full_name = ?, street = ?, city = ?, state = ?, zip = ?, \
                 order_id = COALESCE(?, order_id) \
             WHERE id = ? \
             RETURNING {COLUMNS}"
        ))
        .bind(&input.full_name)
        .bind(&input.street)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.zip)
        .bind(input.order_id.map(|o| o.as_i32()))
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await
        .map_err(|e| RepositoryError::from_write(e, "duplicate shipping info", "unknown order"))?;

        row.map(ShippingInfo::from).ok_or(RepositoryError::NotFound)
    }

    /// Delete shipping info.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no record has this ID.
    pub async fn delete(&self, id: ShippingInfoId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM shipping_info WHERE id = ?")
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
    use rust_decimal::Decimal;
    use solemate_core::NewOrder;

    use super::*;
    use crate::db::{OrderRepository, create_memory_pool};

    fn address(order_id: Option<OrderId>) -> NewShippingInfo {
        NewShippingInfo {
            full_name: "Murphy Murph".to_string(),
            street: "5 Elm St".to_string(),
            city: "Chicago".to_string(),
            state: "IL".to_string(),
            zip: "60601".to_string(),
            order_id,
        }
    }

    #[tokio::test]
    async fn test_unknown_order_is_invalid_reference() {
        let pool = create_memory_pool().await.unwrap();
        let repo = ShippingInfoRepository::new(&pool);

        let err = repo.create(&address(Some(OrderId::new(42)))).await.unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidReference(_)));
    }

    #[tokio::test]
    async fn test_deleting_order_detaches_shipping_info() {
        let pool = create_memory_pool().await.unwrap();
        let order = OrderRepository::new(&pool)
            .create(&NewOrder {
                price: Decimal::new(800, 0),
                quantity: 1,
                time_ordered: None,
            })
            .await
            .unwrap();

        let repo = ShippingInfoRepository::new(&pool);
        let info = repo.create(&address(Some(order.id))).await.unwrap();
        assert_eq!(info.order_id, Some(order.id));

        OrderRepository::new(&pool).delete(order.id).await.unwrap();
        let reloaded = repo.get(info.id).await.unwrap().unwrap();
        assert_eq!(reloaded.order_id, None);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let pool = create_memory_pool().await.unwrap();
        let repo = ShippingInfoRepository::new(&pool);
        assert!(matches!(
            repo.delete(ShippingInfoId::new(7)).await,
            Err(RepositoryError::NotFound)
        ));
    }
}
