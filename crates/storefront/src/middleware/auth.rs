//! Session user extractors.
//!
//! Anonymous visitors are guests without the admin flag. Mutating routes take
//! [`RequireAdmin`], which answers `403 Forbidden` for anyone else.

use axum::{extract::FromRequestParts, http::request::Parts};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use solemate_core::{Email, User, UserId};

use super::session::keys;
use crate::error::AppError;

/// Session-stored user identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub email: Email,
    pub is_admin: bool,
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_admin: user.is_admin,
        }
    }
}

/// Whether a (possibly anonymous) visitor may see mutation controls.
#[must_use]
pub fn is_admin(user: Option<&CurrentUser>) -> bool {
    user.is_some_and(|u| u.is_admin)
}

async fn session_user(parts: &Parts) -> Option<CurrentUser> {
    let session = parts.extensions.get::<Session>()?;
    session
        .get::<CurrentUser>(keys::CURRENT_USER)
        .await
        .ok()
        .flatten()
}

/// Extractor for the optional signed-in user.
pub struct OptionalUser(pub Option<CurrentUser>);

impl<S> FromRequestParts<S> for OptionalUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(session_user(parts).await))
    }
}

/// Extractor that requires an admin user.
pub struct RequireAdmin(pub CurrentUser);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match session_user(parts).await {
            Some(user) if user.is_admin => Ok(Self(user)),
            Some(user) => {
                tracing::warn!(user_id = %user.id, path = %parts.uri.path(), "non-admin tried a mutation");
                Err(AppError::Forbidden)
            }
            None => Err(AppError::Forbidden),
        }
    }
}

/// Store the signed-in user in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CURRENT_USER, user).await
}

/// Clear the signed-in user (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_user(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove::<CurrentUser>(keys::CURRENT_USER).await?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn user(is_admin: bool) -> CurrentUser {
        CurrentUser {
            id: UserId::new(1),
            email: Email::parse("cody@email.com").unwrap(),
            is_admin,
        }
    }

    #[test]
    fn test_guests_are_not_admins() {
        assert!(!is_admin(None));
        assert!(!is_admin(Some(&user(false))));
        assert!(is_admin(Some(&user(true))));
    }

    #[test]
    fn test_from_user_keeps_admin_flag() {
        let current = CurrentUser::from(User {
            id: UserId::new(2),
            email: Email::parse("murphy@email.com").unwrap(),
            is_admin: false,
        });
        assert_eq!(current.id, UserId::new(2));
        assert!(!current.is_admin);
    }
}
