//! Database operations for the API's `SQLite` store.
//!
//! ## Tables
//!
//! - `categories` - Category names (unique)
//! - `products` - Catalog entries, optionally linked to a category
//! - `orders` - Orders recorded at checkout
//! - `shipping_info` - Delivery destinations, optionally linked to an order
//! - `users` - Storefront accounts and their admin flag
//!
//! # Migrations
//!
//! Migrations live in `crates/api/migrations/` and are embedded in
//! [`MIGRATOR`]. They are NOT run on server startup; run them with:
//! ```bash
//! cargo run -p solemate-cli -- migrate
//! ```

pub mod categories;
pub mod orders;
pub mod products;
pub mod shipping_info;
pub mod users;

use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use secrecy::ExposeSecret;
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;

pub use categories::CategoryRepository;
pub use orders::OrderRepository;
pub use products::ProductRepository;
pub use shipping_info::ShippingInfoRepository;
pub use users::UserRepository;

/// Embedded schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique category name).
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// A foreign key points at a row that does not exist.
    #[error("invalid reference: {0}")]
    InvalidReference(String),
}

impl RepositoryError {
    /// Classify a write error, turning constraint failures into domain errors.
    pub(crate) fn from_write(err: sqlx::Error, conflict: &str, reference: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                return Self::Conflict(conflict.to_owned());
            }
            if db_err.is_foreign_key_violation() {
                return Self::InvalidReference(reference.to_owned());
            }
        }
        Self::Database(err)
    }
}

/// Parse a decimal column stored as text.
pub(crate) fn parse_price(raw: &str) -> Result<Decimal, RepositoryError> {
    Decimal::from_str(raw)
        .map_err(|e| RepositoryError::DataCorruption(format!("invalid price {raw:?}: {e}")))
}

/// Create a `SQLite` connection pool with sensible defaults.
///
/// The database file is created if it does not exist. Foreign keys are
/// enforced on every connection.
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is invalid or the connection cannot be
/// established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url.expose_secret())?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}

/// Create a migrated in-memory database holding a single connection.
///
/// Every `:memory:` connection is its own database, so the pool is pinned to
/// one connection that never idles out.
///
/// # Errors
///
/// Returns an error if the connection or a migration fails.
pub async fn create_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    MIGRATOR.run(&pool).await?;
    Ok(pool)
}
