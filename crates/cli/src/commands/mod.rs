//! CLI subcommands.

pub mod migrate;
pub mod seed;
pub mod user;

use solemate_api::config::{ApiConfig, ConfigError};
use solemate_api::db::{self, RepositoryError};
use solemate_core::EmailError;
use sqlx::SqlitePool;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Environment could not be read.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failed.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A repository call failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Invalid email.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// User already exists.
    #[error("User already exists with email: {0}")]
    UserExists(String),
}

/// Open the database the API is configured to use.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the database is unreachable.
pub async fn connect() -> Result<SqlitePool, CommandError> {
    let config = ApiConfig::from_env()?;
    tracing::info!("Connecting to database...");
    Ok(db::create_pool(&config.database_url).await?)
}
