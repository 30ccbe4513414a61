//! Category repository.

use sqlx::SqlitePool;

use solemate_core::{Category, CategoryId, NewCategory};

use super::RepositoryError;

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i32,
    name: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: CategoryId::new(row.id),
            name: row.name,
        }
    }
}

/// Repository for category database operations.
pub struct CategoryRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CategoryRepository<'a> {
    /// Create a new category repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all categories in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        let rows = sqlx::query_as::<_, CategoryRow>("SELECT id, name FROM categories ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    /// Get a category by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: CategoryId) -> Result<Option<Category>, RepositoryError> {
        let row = sqlx::query_as::<_, CategoryRow>("SELECT id, name FROM categories WHERE id = ?")
            .bind(id.as_i32())
            .fetch_optional(self.pool)
            .await?;

        Ok(row.map(Category::from))
    }

    /// Create a category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the name is already taken.
    pub async fn create(&self, input: &NewCategory) -> Result<Category, RepositoryError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (name) VALUES (?) RETURNING id, name",
        )
        .bind(&input.name)
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_write(e, "category name already exists", "category"))?;

        Ok(row.into())
    }

    /// Rename a category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no category has this ID, or
    /// `RepositoryError::Conflict` if the new name is taken.
    pub async fn update(
        &self,
        id: CategoryId,
        input: &NewCategory,
    ) -> Result<Category, RepositoryError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "UPDATE categories SET name = ? WHERE id = ? RETURNING id, name",
        )
        .bind(&input.name)
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await
        .map_err(|e| RepositoryError::from_write(e, "category name already exists", "category"))?;

        row.map(Category::from).ok_or(RepositoryError::NotFound)
    }

    /// Delete a category. Products in it become uncategorised.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no category has this ID.
    pub async fn delete(&self, id: CategoryId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
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
    use solemate_core::NewProduct;

    use super::*;
    use crate::db::{ProductRepository, create_memory_pool};

    fn named(name: &str) -> NewCategory {
        NewCategory {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_name_conflicts() {
        let pool = create_memory_pool().await.unwrap();
        let repo = CategoryRepository::new(&pool);

        repo.create(&named("womens")).await.unwrap();
        let err = repo.create(&named("womens")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_rename() {
        let pool = create_memory_pool().await.unwrap();
        let repo = CategoryRepository::new(&pool);

        repo.create(&named("womens")).await.unwrap();
        let mens = repo.create(&named("mens")).await.unwrap();

        let renamed = repo.update(mens.id, &named("Running Shoes")).await.unwrap();
        assert_eq!(renamed.name, "Running Shoes");
        assert_eq!(renamed.id, mens.id);
    }

    #[tokio::test]
    async fn test_delete_uncategorises_products() {
        let pool = create_memory_pool().await.unwrap();
        let categories = CategoryRepository::new(&pool);
        let products = ProductRepository::new(&pool);

        let dress = categories.create(&named("dress")).await.unwrap();
        let product = products
            .create(&NewProduct {
                name: "Christian Louboutin".to_string(),
                description: "Also a very expensive shoe".to_string(),
                price: Decimal::new(800, 0),
                photo_url: None,
                in_stock: None,
                category_id: Some(dress.id),
            })
            .await
            .unwrap();

        categories.delete(dress.id).await.unwrap();

        let reloaded = products.get(product.id).await.unwrap().unwrap();
        assert_eq!(reloaded.category_id, None);
    }
}
