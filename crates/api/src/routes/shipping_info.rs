//! Shipping info route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use solemate_core::{NewShippingInfo, ShippingInfo, ShippingInfoId};

use crate::db::ShippingInfoRepository;
use crate::error::{AppError, Result};
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<ShippingInfo>>> {
    Ok(Json(ShippingInfoRepository::new(state.pool()).list().await?))
}

#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ShippingInfoId>,
) -> Result<Json<Option<ShippingInfo>>> {
    Ok(Json(ShippingInfoRepository::new(state.pool()).get(id).await?))
}

#[instrument(skip(state, payload))]
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewShippingInfo>,
) -> Result<Json<ShippingInfo>> {
    Ok(Json(
        ShippingInfoRepository::new(state.pool())
            .create(&payload)
            .await?,
    ))
}

#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ShippingInfoId>,
    Json(payload): Json<NewShippingInfo>,
) -> Result<Json<ShippingInfo>> {
    let info = ShippingInfoRepository::new(state.pool())
        .update(id, &payload)
        .await
        .map_err(|e| AppError::from(e).for_resource("shipping info", id))?;
    Ok(Json(info))
}

#[instrument(skip(state))]
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<ShippingInfoId>,
) -> Result<StatusCode> {
    ShippingInfoRepository::new(state.pool())
        .delete(id)
        .await
        .map_err(|e| AppError::from(e).for_resource("shipping info", id))?;
    Ok(StatusCode::OK)
}
