//! Product repository.

use sqlx::SqlitePool;

use solemate_core::DEFAULT_PHOTO_URL;
use solemate_core::{CategoryId, NewProduct, Product, ProductId};

use super::{RepositoryError, parse_price};

const COLUMNS: &str = "id, name, description, price, photo_url, in_stock, category_id";

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i32,
    name: String,
    description: String,
    price: String,
    photo_url: String,
    in_stock: bool,
    category_id: Option<i32>,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProductId::new(row.id),
            name: row.name,
            description: row.description,
            price: parse_price(&row.price)?,
            photo_url: row.photo_url,
            in_stock: row.in_stock,
            category_id: row.category_id.map(CategoryId::new),
        })
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all products in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {COLUMNS} FROM products ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    /// Get a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {COLUMNS} FROM products WHERE id = ?"
        ))
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        row.map(Product::try_from).transpose()
    }

    /// Insert a product. Stock defaults to available and the photo to the
    /// placeholder shoe.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InvalidReference` if the category does not exist.
    pub async fn create(&self, input: &NewProduct) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "INSERT INTO products (name, description, price, photo_url, in_stock, category_id) \
             VALUES (?, ?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        ))
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price.to_string())
        .bind(input.photo_url.as_deref().unwrap_or(DEFAULT_PHOTO_URL))
        .bind(input.in_stock.unwrap_or(true))
        .bind(input.category_id.map(|c| c.as_i32()))
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_write(e, "duplicate product", "unknown category"))?;

        Product::try_from(row)
    }

    /// Update a product in place. Optional fields left as `None` keep their
    /// stored values.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has this ID.
    pub async fn update(
        &self,
        id: ProductId,
        input: &NewProduct,
    ) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "UPDATE products SET \
                 name = ?, \
                 description = ?, \
                 price = ?, \
                 photo_url = COALESCE(?, photo_url), \
                 in_stock = COALESCE(?, in_stock), \
                 category_id = COALESCE(?, category_id) \
             WHERE id = ? \
             RETURNING {COLUMNS}"
        ))
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price.to_string())
        .bind(input.photo_url.as_deref())
        .bind(input.in_stock)
        .bind(input.category_id.map(|c| c.as_i32()))
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await
        .map_err(|e| RepositoryError::from_write(e, "duplicate product", "unknown category"))?;

        row.ok_or(RepositoryError::NotFound)
            .and_then(Product::try_from)
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has this ID.
    pub async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.as_i32())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
