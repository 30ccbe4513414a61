//! Application state shared across handlers.

use std::sync::Arc;

use crate::api_client::{ApiClient, ApiError};
use crate::config::StorefrontConfig;
use crate::store::Store;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and gives handlers the API
/// client and the state container.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    api: ApiClient,
    store: Store,
    secure_cookies: bool,
}

impl AppState {
    /// Create a new application state from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the HTTP client cannot be built.
    pub fn new(config: &StorefrontConfig) -> Result<Self, ApiError> {
        let api = ApiClient::new(config.api_url.clone(), config.request_timeout)?;
        Ok(Self::with_client(api, config.secure_cookies()))
    }

    /// Create state around an existing client with an empty store.
    #[must_use]
    pub fn with_client(api: ApiClient, secure_cookies: bool) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                api,
                store: Store::new(),
                secure_cookies,
            }),
        }
    }

    /// Get a reference to the REST API client.
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }

    /// Get a reference to the state container.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.inner.store
    }

    /// Whether session cookies are marked `Secure`.
    #[must_use]
    pub fn secure_cookies(&self) -> bool {
        self.inner.secure_cookies
    }
}
