//! User route handlers.
//!
//! `login` is a lookup only: it resolves an email to a user record so the
//! storefront can bind it to a session. Credential checks happen upstream.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use solemate_core::{LoginRequest, NewUser, User, UserId};

use crate::db::UserRepository;
use crate::error::{AppError, Result};
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Json<Option<User>>> {
    Ok(Json(UserRepository::new(state.pool()).get_by_id(id).await?))
}

#[instrument(skip(state))]
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewUser>,
) -> Result<Json<User>> {
    Ok(Json(UserRepository::new(state.pool()).create(&payload).await?))
}

#[instrument(skip(state))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<User>> {
    UserRepository::new(state.pool())
        .get_by_email(&payload.email)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("user {}", payload.email)))
}
