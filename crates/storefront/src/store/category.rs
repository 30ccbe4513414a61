//! Category slice.

use solemate_core::{Category, CategoryId, NewCategory};

use super::resource::{self, ResourceAction, ResourceState, StoreSlice};
use super::{Action, RootState, Store};
use crate::api_client::{ApiClient, ApiError};

pub type CategoryState = ResourceState<Category>;

impl StoreSlice for Category {
    fn wrap(action: ResourceAction<Self>) -> Action {
        Action::Category(action)
    }

    fn slice(state: &RootState) -> &ResourceState<Self> {
        &state.categories
    }
}

#[must_use]
pub fn reducer(state: CategoryState, action: &Action) -> CategoryState {
    match action {
        Action::Category(action) => resource::reduce(state, action),
        Action::Product(_) | Action::ShippingInfo(_) | Action::Order(_) => state,
    }
}

/// # Errors
///
/// Returns `ApiError` if the request fails.
pub async fn fetch_categories(api: &ApiClient, store: &Store) -> Result<Vec<Category>, ApiError> {
    resource::fetch_all(api, store).await
}

/// # Errors
///
/// Returns `ApiError` if the request fails.
pub async fn fetch_category(
    api: &ApiClient,
    store: &Store,
    id: CategoryId,
) -> Result<Option<Category>, ApiError> {
    resource::fetch_one(api, store, id).await
}

/// # Errors
///
/// Returns `ApiError::Status` with `409` if the name is taken.
pub async fn create_category(
    api: &ApiClient,
    store: &Store,
    payload: &NewCategory,
) -> Result<Category, ApiError> {
    resource::create(api, store, payload).await
}

/// # Errors
///
/// Returns `ApiError::NotFound` if the category no longer exists.
pub async fn update_category(
    api: &ApiClient,
    store: &Store,
    id: CategoryId,
    payload: &NewCategory,
) -> Result<Category, ApiError> {
    resource::update(api, store, id, payload).await
}

/// # Errors
///
/// Returns `ApiError::NotFound` if the category no longer exists.
pub async fn delete_category(
    api: &ApiClient,
    store: &Store,
    id: CategoryId,
) -> Result<(), ApiError> {
    resource::delete::<Category>(api, store, id).await
}

#[must_use]
pub fn categories(state: &RootState) -> &[Category] {
    &Category::slice(state).items
}

#[must_use]
pub fn current_category(state: &RootState) -> Option<&Category> {
    Category::slice(state).current.as_ref()
}
