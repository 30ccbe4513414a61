//! User management commands.

use solemate_api::db::{RepositoryError, UserRepository};
use solemate_core::{Email, NewUser, User};
use sqlx::SqlitePool;

use super::CommandError;

/// Create a new user.
///
/// # Errors
///
/// Returns an error if the email is invalid or already registered.
pub async fn create(pool: &SqlitePool, email: &str, is_admin: bool) -> Result<User, CommandError> {
    let email = Email::parse(email)?;

    tracing::info!("Creating user: {} (admin: {})", email, is_admin);
    let user = UserRepository::new(pool)
        .create(&NewUser {
            email: email.clone(),
            is_admin,
        })
        .await
        .map_err(|e| match e {
            RepositoryError::Conflict(_) => CommandError::UserExists(email.to_string()),
            other => CommandError::Repository(other),
        })?;

    tracing::info!(user_id = %user.id, "User created");
    Ok(user)
}
