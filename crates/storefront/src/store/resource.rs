//! Generic resource slice: state, actions, reducer and thunks.
//!
//! Each of the four resource slices is a `ResourceState<T>` driven by
//! `ResourceAction<T>`. Thunks issue one API request, then dispatch either
//! the success action carrying the server payload or `Failed`.

use std::fmt;

use reqwest::StatusCode;
use solemate_core::Resource;

use super::{Action, RootState, Store};
use crate::api_client::{ApiClient, ApiError};

/// A resource type that owns a slice of the root state.
pub trait StoreSlice: Resource {
    /// Wrap a slice action into the root action enum.
    fn wrap(action: ResourceAction<Self>) -> Action;

    /// Borrow this resource's slice from the root state.
    fn slice(state: &RootState) -> &ResourceState<Self>;
}

/// The five requests a slice can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchAll,
    FetchOne,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FetchAll => "fetch all",
            Self::FetchOne => "fetch one",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// User-facing classification of a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The API could not be reached.
    Unavailable,
    /// The entity does not exist.
    NotFound,
    /// The API refused the request (validation, conflict, server error).
    Rejected,
    /// The API answered with something unreadable.
    Invalid,
}

/// The last failure recorded in a slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    pub op: Operation,
    pub kind: ErrorKind,
    pub message: String,
}

impl StoreError {
    /// Classify an API error for display.
    #[must_use]
    pub fn new(op: Operation, error: &ApiError) -> Self {
        let (kind, message) = match error {
            ApiError::Transport(_) => (
                ErrorKind::Unavailable,
                "The catalog service is unavailable. Please try again.".to_string(),
            ),
            ApiError::NotFound => (ErrorKind::NotFound, "That item no longer exists.".to_string()),
            ApiError::Status { status, body } if *status == StatusCode::CONFLICT => {
                (ErrorKind::Rejected, body.clone())
            }
            ApiError::Status { status, .. } if status.is_client_error() => (
                ErrorKind::Rejected,
                "The request was rejected. Check the form and try again.".to_string(),
            ),
            ApiError::Status { .. } => (
                ErrorKind::Rejected,
                "The catalog service failed to complete the request.".to_string(),
            ),
            ApiError::Decode(_) | ApiError::Url(_) => (
                ErrorKind::Invalid,
                "The catalog service sent an unexpected response.".to_string(),
            ),
        };
        Self { op, kind, message }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Could not {}: {}", self.op, self.message)
    }
}

/// State of one resource slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceState<T> {
    /// Collection in server order.
    pub items: Vec<T>,
    /// Most recently fetched single entity.
    pub current: Option<T>,
    /// Last failure, cleared by the next success.
    pub error: Option<StoreError>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current: None,
            error: None,
        }
    }
}

/// Actions understood by a resource slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceAction<T: Resource> {
    /// Fetch-all succeeded; replaces `items`.
    Loaded(Vec<T>),
    /// Fetch-one succeeded; replaces `current` (`None` when the API sent `null`).
    LoadedOne(Option<T>),
    /// Create succeeded; appends to `items`.
    Added(T),
    /// Update succeeded; replaces the matching item.
    Updated(T),
    /// Delete succeeded; removes the matching item.
    Removed(T::Id),
    /// A request failed.
    Failed(StoreError),
}

/// Fold one action into a slice.
#[must_use]
pub fn reduce<T: Resource>(
    mut state: ResourceState<T>,
    action: &ResourceAction<T>,
) -> ResourceState<T> {
    // Any acknowledgment from the server clears the last failure.
    state.error = None;

    match action {
        ResourceAction::Loaded(items) => state.items.clone_from(items),
        ResourceAction::LoadedOne(item) => state.current.clone_from(item),
        ResourceAction::Added(item) => state.items.push(item.clone()),
        ResourceAction::Updated(item) => {
            let id = item.id();
            for existing in state.items.iter_mut().filter(|existing| existing.id() == id) {
                *existing = item.clone();
            }
            if state.current.as_ref().is_some_and(|c| c.id() == id) {
                state.current = Some(item.clone());
            }
        }
        ResourceAction::Removed(id) => {
            state.items.retain(|existing| existing.id() != *id);
            if state.current.as_ref().is_some_and(|c| c.id() == *id) {
                state.current = None;
            }
        }
        ResourceAction::Failed(error) => state.error = Some(error.clone()),
    }

    state
}

/// Dispatch the outcome of one request and hand it back to the caller.
fn settle<T: StoreSlice, R>(
    store: &Store,
    op: Operation,
    result: Result<R, ApiError>,
    on_success: impl FnOnce(&R) -> ResourceAction<T>,
) -> Result<R, ApiError> {
    match result {
        Ok(value) => {
            tracing::debug!(resource = T::NAME, %op, "request succeeded");
            store.dispatch(T::wrap(on_success(&value)));
            Ok(value)
        }
        Err(error) => {
            tracing::warn!(resource = T::NAME, %op, error = %error, "request failed");
            store.dispatch(T::wrap(ResourceAction::Failed(StoreError::new(op, &error))));
            Err(error)
        }
    }
}

/// Fetch the whole collection into `items`.
///
/// # Errors
///
/// Returns the `ApiError` after recording it in the slice.
pub async fn fetch_all<T: StoreSlice>(api: &ApiClient, store: &Store) -> Result<Vec<T>, ApiError> {
    let result = api.list::<T>().await;
    settle(store, Operation::FetchAll, result, |items: &Vec<T>| {
        ResourceAction::Loaded(items.clone())
    })
}

/// Fetch one entity into `current`.
///
/// # Errors
///
/// Returns the `ApiError` after recording it in the slice.
pub async fn fetch_one<T: StoreSlice>(
    api: &ApiClient,
    store: &Store,
    id: T::Id,
) -> Result<Option<T>, ApiError> {
    let result = api.get::<T>(id).await;
    settle(store, Operation::FetchOne, result, |item: &Option<T>| {
        ResourceAction::LoadedOne(item.clone())
    })
}

/// Create an entity and append the server's copy to `items`.
///
/// # Errors
///
/// Returns the `ApiError` after recording it in the slice.
pub async fn create<T: StoreSlice>(
    api: &ApiClient,
    store: &Store,
    payload: &T::Payload,
) -> Result<T, ApiError> {
    let result = api.create::<T>(payload).await;
    settle(store, Operation::Create, result, |item: &T| {
        ResourceAction::Added(item.clone())
    })
}

/// Update an entity and replace it in `items`.
///
/// # Errors
///
/// Returns the `ApiError` after recording it in the slice.
pub async fn update<T: StoreSlice>(
    api: &ApiClient,
    store: &Store,
    id: T::Id,
    payload: &T::Payload,
) -> Result<T, ApiError> {
    let result = api.update::<T>(id, payload).await;
    settle(store, Operation::Update, result, |item: &T| {
        ResourceAction::Updated(item.clone())
    })
}

/// Delete an entity and drop it from `items`.
///
/// # Errors
///
/// Returns the `ApiError` after recording it in the slice.
pub async fn delete<T: StoreSlice>(
    api: &ApiClient,
    store: &Store,
    id: T::Id,
) -> Result<(), ApiError> {
    let result = api.delete::<T>(id).await;
    settle::<T, _>(store, Operation::Delete, result, |_: &()| ResourceAction::Removed(id))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::net::TcpListener;
    use std::time::Duration;

    use rust_decimal::Decimal;
    use solemate_core::{Category, CategoryId};
    use url::Url;

    use super::*;

    fn category(id: i32, name: &str) -> Category {
        Category {
            id: CategoryId::new(id),
            name: name.to_string(),
        }
    }

    fn failure() -> ResourceAction<Category> {
        ResourceAction::Failed(StoreError::new(Operation::Create, &ApiError::NotFound))
    }

    #[test]
    fn test_loaded_one_null_clears_current() {
        let state = reduce(
            ResourceState::default(),
            &ResourceAction::LoadedOne(Some(category(1, "womens"))),
        );
        assert_eq!(state.current, Some(category(1, "womens")));

        let state = reduce(state, &ResourceAction::LoadedOne(None));
        assert_eq!(state.current, None);
    }

    #[test]
    fn test_update_refreshes_current_with_same_id() {
        let state = ResourceState {
            items: vec![category(1, "womens"), category(2, "mens")],
            current: Some(category(2, "mens")),
            error: None,
        };
        let state = reduce(state, &ResourceAction::Updated(category(2, "gents")));
        assert_eq!(state.current, Some(category(2, "gents")));
        assert_eq!(state.items[0], category(1, "womens"));
    }

    #[test]
    fn test_remove_clears_matching_current_only() {
        let state = ResourceState {
            items: vec![category(1, "womens"), category(2, "mens")],
            current: Some(category(1, "womens")),
            error: None,
        };
        let state = reduce(state, &ResourceAction::Removed(CategoryId::new(2)));
        assert_eq!(state.current, Some(category(1, "womens")));

        let state = reduce(state, &ResourceAction::Removed(CategoryId::new(1)));
        assert_eq!(state.current, None);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_failure_keeps_items_and_next_success_clears_it() {
        let loaded = reduce(
            ResourceState::default(),
            &ResourceAction::Loaded(vec![category(1, "womens")]),
        );
        let failed = reduce(loaded.clone(), &failure());
        assert_eq!(failed.items, loaded.items);
        assert_eq!(failed.error.as_ref().unwrap().kind, ErrorKind::NotFound);
        assert_eq!(failed.error.as_ref().unwrap().op, Operation::Create);

        let recovered = reduce(failed, &ResourceAction::Added(category(2, "dress")));
        assert!(recovered.error.is_none());
        assert_eq!(recovered.items.len(), 2);
    }

    #[test]
    fn test_conflict_message_is_surfaced() {
        let error = StoreError::new(
            Operation::Create,
            &ApiError::Status {
                status: StatusCode::CONFLICT,
                body: "Conflict: category name already exists".to_string(),
            },
        );
        assert_eq!(error.kind, ErrorKind::Rejected);
        assert_eq!(
            error.to_string(),
            "Could not create: Conflict: category name already exists"
        );

        let error = StoreError::new(
            Operation::FetchAll,
            &ApiError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: "Internal server error".to_string(),
            },
        );
        assert_eq!(error.kind, ErrorKind::Rejected);
        assert!(!error.message.contains("Internal server error"));
    }

    #[tokio::test]
    async fn test_unreachable_api_is_recorded_as_unavailable() {
        // Reserve a port, then release it so nothing is listening there
        let addr = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();
        let api = ApiClient::new(
            Url::parse(&format!("http://{addr}/api/")).unwrap(),
            Duration::from_millis(500),
        )
        .unwrap();

        let store = Store::new();
        let loaded = vec![category(1, "womens"), category(2, "mens")];
        store.dispatch(Category::wrap(ResourceAction::Loaded(loaded.clone())));

        let err = fetch_all::<Category>(&api, &store).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        let (items, error) = store.select(|root| {
            let slice = Category::slice(root);
            (slice.items.clone(), slice.error.clone())
        });
        assert_eq!(items, loaded);
        let error = error.unwrap();
        assert_eq!(error.kind, ErrorKind::Unavailable);
        assert_eq!(error.op, Operation::FetchAll);
        assert_eq!(
            error.to_string(),
            "Could not fetch all: The catalog service is unavailable. Please try again."
        );

        let err = delete::<Category>(&api, &store, CategoryId::new(1))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        let (items, error) = store.select(|root| {
            let slice = Category::slice(root);
            (slice.items.clone(), slice.error.clone())
        });
        assert_eq!(items, loaded);
        assert_eq!(error.unwrap().op, Operation::Delete);
    }

    #[test]
    fn test_decode_errors_are_invalid() {
        let decode = serde_json::from_str::<Decimal>("{").unwrap_err();
        let error = StoreError::new(Operation::FetchOne, &ApiError::Decode(decode));
        assert_eq!(error.kind, ErrorKind::Invalid);
    }
}
