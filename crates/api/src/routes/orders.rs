//! Order route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use solemate_core::{NewOrder, Order, OrderId};

use crate::db::OrderRepository;
use crate::error::{AppError, Result};
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Order>>> {
    Ok(Json(OrderRepository::new(state.pool()).list().await?))
}

#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<Option<Order>>> {
    Ok(Json(OrderRepository::new(state.pool()).get(id).await?))
}

#[instrument(skip(state))]
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewOrder>,
) -> Result<Json<Order>> {
    if payload.quantity < 0 {
        return Err(AppError::BadRequest("quantity cannot be negative".to_string()));
    }
    let order = OrderRepository::new(state.pool()).create(&payload).await?;
    tracing::info!(order_id = %order.id, quantity = order.quantity, "order recorded");
    Ok(Json(order))
}

#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    Json(payload): Json<NewOrder>,
) -> Result<Json<Order>> {
    if payload.quantity < 0 {
        return Err(AppError::BadRequest("quantity cannot be negative".to_string()));
    }
    let order = OrderRepository::new(state.pool())
        .update(id, &payload)
        .await
        .map_err(|e| AppError::from(e).for_resource("order", id))?;
    Ok(Json(order))
}

#[instrument(skip(state))]
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<StatusCode> {
    OrderRepository::new(state.pool())
        .delete(id)
        .await
        .map_err(|e| AppError::from(e).for_resource("order", id))?;
    Ok(StatusCode::OK)
}
