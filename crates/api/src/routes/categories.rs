//! Category route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use solemate_core::{Category, CategoryId, NewCategory};

use crate::db::CategoryRepository;
use crate::error::{AppError, Result};
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    Ok(Json(CategoryRepository::new(state.pool()).list().await?))
}

#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Result<Json<Option<Category>>> {
    Ok(Json(CategoryRepository::new(state.pool()).get(id).await?))
}

#[instrument(skip(state))]
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewCategory>,
) -> Result<Json<Category>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("category name is required".to_string()));
    }
    Ok(Json(CategoryRepository::new(state.pool()).create(&payload).await?))
}

#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
    Json(payload): Json<NewCategory>,
) -> Result<Json<Category>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("category name is required".to_string()));
    }
    let category = CategoryRepository::new(state.pool())
        .update(id, &payload)
        .await
        .map_err(|e| AppError::from(e).for_resource("category", id))?;
    Ok(Json(category))
}

#[instrument(skip(state))]
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Result<StatusCode> {
    CategoryRepository::new(state.pool())
        .delete(id)
        .await
        .map_err(|e| AppError::from(e).for_resource("category", id))?;
    Ok(StatusCode::OK)
}
