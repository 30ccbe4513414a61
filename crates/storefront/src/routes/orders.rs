//! Order route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::instrument;

use solemate_core::OrderId;

use crate::components::OrderSummary;
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::{CurrentUser, OptionalUser, RequireAdmin};
use crate::state::AppState;
use crate::store::{order, shipping_info};

/// Order summary page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/show.html")]
pub struct OrderShowTemplate {
    pub user: Option<CurrentUser>,
    pub summary: String,
}

/// Admin order list template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/index.html")]
pub struct OrdersIndexTemplate {
    pub user: Option<CurrentUser>,
    pub orders: Vec<(OrderId, String)>,
}

/// Display one order.
#[instrument(skip(state, user))]
pub async fn show(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    Path(id): Path<OrderId>,
) -> Result<OrderShowTemplate> {
    let placed = order::fetch_order(state.api(), state.store(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;
    shipping_info::fetch_shipping_infos(state.api(), state.store()).await?;

    let summary = state.store().select(|root| {
        OrderSummary {
            order: &placed,
            shipping: shipping_info::for_order(root, id),
            user: user.as_ref(),
        }
        .render()
    })?;

    Ok(OrderShowTemplate { user, summary })
}

/// Display every order with its destination.
#[instrument(skip(state, admin))]
pub async fn index(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> Result<OrdersIndexTemplate> {
    order::fetch_orders(state.api(), state.store()).await?;
    shipping_info::fetch_shipping_infos(state.api(), state.store()).await?;

    let orders = state.store().select(|root| {
        order::orders(root)
            .iter()
            .map(|placed| {
                let summary = OrderSummary {
                    order: placed,
                    shipping: shipping_info::for_order(root, placed.id),
                    user: None,
                }
                .render()?;
                Ok((placed.id, summary))
            })
            .collect::<askama::Result<Vec<_>>>()
    })?;

    Ok(OrdersIndexTemplate {
        user: Some(admin),
        orders,
    })
}

/// Cancel an order and remove its shipping info.
#[instrument(skip(state, admin), fields(user_id = %admin.id))]
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<OrderId>,
) -> Result<Redirect> {
    shipping_info::fetch_shipping_infos(state.api(), state.store()).await?;
    let attached = state
        .store()
        .select(|root| shipping_info::for_order(root, id).map(|info| info.id));

    if let Some(info_id) = attached {
        shipping_info::delete_shipping_info(state.api(), state.store(), info_id).await?;
    }
    order::delete_order(state.api(), state.store(), id).await?;

    tracing::info!(order_id = %id, "order cancelled");
    Ok(Redirect::to("/orders"))
}
