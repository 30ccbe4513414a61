//! Seed the database with the demo catalog.
//!
//! Creates the three demo categories, a handful of shoes and two accounts
//! (one admin). Seeding is skipped when any category already exists.

use rust_decimal::Decimal;
use solemate_api::db::{CategoryRepository, ProductRepository, UserRepository};
use solemate_core::{Category, Email, NewCategory, NewProduct, NewUser};
use sqlx::SqlitePool;

use super::CommandError;

const CATEGORIES: [&str; 3] = ["womens", "mens", "dress"];

/// Demo shoe: name, description, whole-dollar price, category index.
const PRODUCTS: [(&str, &str, i64, usize); 3] = [
    ("Air Jordans", "Classic high-top basketball shoes.", 1500, 1),
    ("Christian Louboutin", "Red-soled stilettos.", 800, 0),
    ("Nike", "Everyday running shoes.", 70, 1),
];

const USERS: [(&str, bool); 2] = [("cody@email.com", true), ("murphy@email.com", false)];

/// Counts of rows written by [`run`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: usize,
    pub products: usize,
    pub users: usize,
}

/// Seed categories, products and users.
///
/// # Errors
///
/// Returns an error if any insert fails.
pub async fn run(pool: &SqlitePool) -> Result<SeedSummary, CommandError> {
    let category_repo = CategoryRepository::new(pool);
    if !category_repo.list().await?.is_empty() {
        tracing::info!("Database already has categories, skipping seed");
        return Ok(SeedSummary::default());
    }

    let mut categories: Vec<Category> = Vec::with_capacity(CATEGORIES.len());
    for name in CATEGORIES {
        categories.push(
            category_repo
                .create(&NewCategory {
                    name: name.to_string(),
                })
                .await?,
        );
    }

    let product_repo = ProductRepository::new(pool);
    for (name, description, price, category) in PRODUCTS {
        product_repo
            .create(&NewProduct {
                name: name.to_string(),
                description: description.to_string(),
                price: Decimal::new(price, 0),
                photo_url: None,
                in_stock: Some(true),
                category_id: categories.get(category).map(|c| c.id),
            })
            .await?;
    }

    let user_repo = UserRepository::new(pool);
    for (email, is_admin) in USERS {
        user_repo
            .create(&NewUser {
                email: Email::parse(email)?,
                is_admin,
            })
            .await?;
    }

    let summary = SeedSummary {
        categories: categories.len(),
        products: PRODUCTS.len(),
        users: USERS.len(),
    };
    tracing::info!(
        categories = summary.categories,
        products = summary.products,
        users = summary.users,
        "Seeding complete!"
    );
    Ok(summary)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use solemate_api::db::create_memory_pool;

    use super::*;

    #[tokio::test]
    async fn test_seed_once() {
        let pool = create_memory_pool().await.unwrap();

        let first = run(&pool).await.unwrap();
        assert_eq!(first.products, 3);

        let products = ProductRepository::new(&pool).list().await.unwrap();
        assert_eq!(products[0].name, "Air Jordans");
        assert_eq!(products[0].price, Decimal::new(1500, 0));
        assert_eq!(products[0].photo_url, solemate_core::DEFAULT_PHOTO_URL);

        let second = run(&pool).await.unwrap();
        assert_eq!(second, SeedSummary::default());
        assert_eq!(ProductRepository::new(&pool).list().await.unwrap().len(), 3);
    }
}
