//! Product route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use solemate_core::{NewProduct, Product, ProductId};

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// `GET /api/products` - every product, in insertion order.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool()).list().await?;
    Ok(Json(products))
}

/// `GET /api/products/{id}` - the product, or `null` when it does not exist.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Option<Product>>> {
    let product = ProductRepository::new(state.pool()).get(id).await?;
    Ok(Json(product))
}

/// `POST /api/products` - create and echo the persisted product.
#[instrument(skip(state))]
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewProduct>,
) -> Result<Json<Product>> {
    let product = ProductRepository::new(state.pool()).create(&payload).await?;
    tracing::info!(product_id = %product.id, "product created");
    Ok(Json(product))
}

/// `PUT /api/products/{id}` - update and echo the persisted product.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(payload): Json<NewProduct>,
) -> Result<Json<Product>> {
    let product = ProductRepository::new(state.pool())
        .update(id, &payload)
        .await
        .map_err(|e| AppError::from(e).for_resource("product", id))?;
    Ok(Json(product))
}

/// `DELETE /api/products/{id}`.
#[instrument(skip(state))]
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<StatusCode> {
    ProductRepository::new(state.pool())
        .delete(id)
        .await
        .map_err(|e| AppError::from(e).for_resource("product", id))?;
    tracing::info!(product_id = %id, "product deleted");
    Ok(StatusCode::OK)
}
