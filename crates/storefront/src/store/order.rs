//! Order slice.

use solemate_core::{NewOrder, Order, OrderId};

use super::resource::{self, ResourceAction, ResourceState, StoreSlice};
use super::{Action, RootState, Store};
use crate::api_client::{ApiClient, ApiError};

pub type OrderState = ResourceState<Order>;

impl StoreSlice for Order {
    fn wrap(action: ResourceAction<Self>) -> Action {
        Action::Order(action)
    }

    fn slice(state: &RootState) -> &ResourceState<Self> {
        &state.orders
    }
}

#[must_use]
pub fn reducer(state: OrderState, action: &Action) -> OrderState {
    match action {
        Action::Order(action) => resource::reduce(state, action),
        Action::Product(_) | Action::Category(_) | Action::ShippingInfo(_) => state,
    }
}

/// # Errors
///
/// Returns `ApiError` if the request fails.
pub async fn fetch_orders(api: &ApiClient, store: &Store) -> Result<Vec<Order>, ApiError> {
    resource::fetch_all(api, store).await
}

/// # Errors
///
/// Returns `ApiError` if the request fails.
pub async fn fetch_order(
    api: &ApiClient,
    store: &Store,
    id: OrderId,
) -> Result<Option<Order>, ApiError> {
    resource::fetch_one(api, store, id).await
}

/// # Errors
///
/// Returns `ApiError` if the request fails.
pub async fn create_order(
    api: &ApiClient,
    store: &Store,
    payload: &NewOrder,
) -> Result<Order, ApiError> {
    resource::create(api, store, payload).await
}

/// # Errors
///
/// Returns `ApiError::NotFound` if the order no longer exists.
pub async fn update_order(
    api: &ApiClient,
    store: &Store,
    id: OrderId,
    payload: &NewOrder,
) -> Result<Order, ApiError> {
    resource::update(api, store, id, payload).await
}

/// # Errors
///
/// Returns `ApiError::NotFound` if the order no longer exists.
pub async fn delete_order(api: &ApiClient, store: &Store, id: OrderId) -> Result<(), ApiError> {
    resource::delete::<Order>(api, store, id).await
}

#[must_use]
pub fn orders(state: &RootState) -> &[Order] {
    &Order::slice(state).items
}

#[must_use]
pub fn current_order(state: &RootState) -> Option<&Order> {
    Order::slice(state).current.as_ref()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    use super::*;

    fn placed(id: i32, price: i64) -> Order {
        Order {
            id: OrderId::new(id),
            price: Decimal::new(price, 0),
            quantity: 1,
            time_ordered: Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_cancelled_order_leaves_current_slot() {
        let state = reducer(
            OrderState::default(),
            &Action::Order(ResourceAction::Loaded(vec![placed(1, 800), placed(2, 70)])),
        );
        let state = reducer(
            state,
            &Action::Order(ResourceAction::LoadedOne(Some(placed(2, 70)))),
        );

        let state = reducer(state, &Action::Order(ResourceAction::Removed(OrderId::new(2))));
        assert_eq!(state.items, vec![placed(1, 800)]);
        assert!(state.current.is_none());
    }

    #[test]
    fn test_placed_order_is_appended() {
        let state = reducer(
            OrderState::default(),
            &Action::Order(ResourceAction::Loaded(vec![placed(1, 800)])),
        );
        let state = reducer(state, &Action::Order(ResourceAction::Added(placed(2, 2300))));
        assert_eq!(state.items.last(), Some(&placed(2, 2300)));
    }
}
