//! Shipping info slice.
//!
//! Deletes go to `/shippingInfo/{id}` like every other member route.

use solemate_core::{NewShippingInfo, OrderId, ShippingInfo, ShippingInfoId};

use super::resource::{self, ResourceAction, ResourceState, StoreSlice};
use super::{Action, RootState, Store};
use crate::api_client::{ApiClient, ApiError};

pub type ShippingInfoState = ResourceState<ShippingInfo>;

impl StoreSlice for ShippingInfo {
    fn wrap(action: ResourceAction<Self>) -> Action {
        Action::ShippingInfo(action)
    }

    fn slice(state: &RootState) -> &ResourceState<Self> {
        &state.shipping_info
    }
}

#[must_use]
pub fn reducer(state: ShippingInfoState, action: &Action) -> ShippingInfoState {
    match action {
        Action::ShippingInfo(action) => resource::reduce(state, action),
        Action::Product(_) | Action::Category(_) | Action::Order(_) => state,
    }
}

/// # Errors
///
/// Returns `ApiError` if the request fails.
pub async fn fetch_shipping_infos(
    api: &ApiClient,
    store: &Store,
) -> Result<Vec<ShippingInfo>, ApiError> {
    resource::fetch_all(api, store).await
}

/// # Errors
///
/// Returns `ApiError` if the request fails.
pub async fn fetch_shipping_info(
    api: &ApiClient,
    store: &Store,
    id: ShippingInfoId,
) -> Result<Option<ShippingInfo>, ApiError> {
    resource::fetch_one(api, store, id).await
}

/// # Errors
///
/// Returns `ApiError::Status` with `400` if the order id is unknown.
pub async fn create_shipping_info(
    api: &ApiClient,
    store: &Store,
    payload: &NewShippingInfo,
) -> Result<ShippingInfo, ApiError> {
    resource::create(api, store, payload).await
}

/// # Errors
///
/// Returns `ApiError::NotFound` if the record no longer exists.
pub async fn update_shipping_info(
    api: &ApiClient,
    store: &Store,
    id: ShippingInfoId,
    payload: &NewShippingInfo,
) -> Result<ShippingInfo, ApiError> {
    resource::update(api, store, id, payload).await
}

/// # Errors
///
/// Returns `ApiError::NotFound` if the record no longer exists.
pub async fn delete_shipping_info(
    api: &ApiClient,
    store: &Store,
    id: ShippingInfoId,
) -> Result<(), ApiError> {
    resource::delete::<ShippingInfo>(api, store, id).await
}

#[must_use]
pub fn shipping_infos(state: &RootState) -> &[ShippingInfo] {
    &ShippingInfo::slice(state).items
}

/// The shipping destination recorded for an order, if loaded.
#[must_use]
pub fn for_order(state: &RootState, order_id: OrderId) -> Option<&ShippingInfo> {
    shipping_infos(state)
        .iter()
        .find(|info| info.order_id == Some(order_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn destination(id: i32, order: i32) -> ShippingInfo {
        ShippingInfo {
            id: ShippingInfoId::new(id),
            full_name: "Cody Codes".to_string(),
            street: "1 Main St".to_string(),
            city: "Chicago".to_string(),
            state: "IL".to_string(),
            zip: "60601".to_string(),
            order_id: Some(OrderId::new(order)),
        }
    }

    #[test]
    fn test_for_order_matches_association() {
        let mut root = RootState::default();
        root.shipping_info = reducer(
            root.shipping_info,
            &Action::ShippingInfo(ResourceAction::Loaded(vec![
                destination(1, 10),
                destination(2, 11),
            ])),
        );

        assert_eq!(
            for_order(&root, OrderId::new(11)).map(|i| i.id),
            Some(ShippingInfoId::new(2))
        );
        assert!(for_order(&root, OrderId::new(12)).is_none());
    }

    #[test]
    fn test_delete_removes_by_shipping_id() {
        let state = reducer(
            ShippingInfoState::default(),
            &Action::ShippingInfo(ResourceAction::Loaded(vec![
                destination(1, 10),
                destination(2, 11),
            ])),
        );
        let state = reducer(
            state,
            &Action::ShippingInfo(ResourceAction::Removed(ShippingInfoId::new(1))),
        );
        assert_eq!(state.items, vec![destination(2, 11)]);
    }
}
