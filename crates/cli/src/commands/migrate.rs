//! Database migration command.
//!
//! Applies the migrations embedded in the API crate
//! (`crates/api/migrations/`). Already-applied migrations are skipped.

use solemate_api::db::MIGRATOR;
use sqlx::SqlitePool;

use super::CommandError;

/// Run all pending migrations.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn run(pool: &SqlitePool) -> Result<(), CommandError> {
    tracing::info!("Running migrations...");
    MIGRATOR.run(pool).await?;
    tracing::info!("Migrations complete!");
    Ok(())
}
