//! User repository.

use sqlx::SqlitePool;

use solemate_core::{Email, NewUser, User, UserId};

use super::RepositoryError;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i32,
    email: String,
    is_admin: bool,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: UserId::new(row.id),
            email,
            is_admin: row.is_admin,
        })
    }
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a user by their ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored email is invalid.
    pub async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let row =
            sqlx::query_as::<_, UserRow>("SELECT id, email, is_admin FROM users WHERE id = ?")
                .bind(id.as_i32())
                .fetch_optional(self.pool)
                .await?;

        row.map(User::try_from).transpose()
    }

    /// Get a user by their email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored email is invalid.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let row =
            sqlx::query_as::<_, UserRow>("SELECT id, email, is_admin FROM users WHERE email = ?")
                .bind(email.as_str())
                .fetch_optional(self.pool)
                .await?;

        row.map(User::try_from).transpose()
    }

    /// Create a user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    pub async fn create(&self, input: &NewUser) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (email, is_admin) VALUES (?, ?) RETURNING id, email, is_admin",
        )
        .bind(input.email.as_str())
        .bind(input.is_admin)
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_write(e, "email already exists", "user"))?;

        User::try_from(row)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;

    #[tokio::test]
    async fn test_lookup_by_email() {
        let pool = create_memory_pool().await.unwrap();
        let repo = UserRepository::new(&pool);

        let email = Email::parse("cody@email.com").unwrap();
        let created = repo
            .create(&NewUser {
                email: email.clone(),
                is_admin: true,
            })
            .await
            .unwrap();

        let found = repo.get_by_email(&email).await.unwrap().unwrap();
        assert_eq!(found, created);
        assert!(found.is_admin);
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let pool = create_memory_pool().await.unwrap();
        let repo = UserRepository::new(&pool);

        let input = NewUser {
            email: Email::parse("murphy@email.com").unwrap(),
            is_admin: false,
        };
        repo.create(&input).await.unwrap();
        assert!(matches!(
            repo.create(&input).await.unwrap_err(),
            RepositoryError::Conflict(_)
        ));
    }
}
