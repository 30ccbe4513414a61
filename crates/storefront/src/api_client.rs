//! REST client for the Solemate API.
//!
//! Every method issues exactly one HTTP request. Resource endpoints are
//! derived from [`Resource::PATH`], so the same five calls serve products,
//! categories, orders and shipping info.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use solemate_core::{Email, LoginRequest, Resource, User};

/// Errors that can occur when talking to the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection failure, timeout or unreadable response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The requested entity does not exist.
    #[error("not found")]
    NotFound,

    /// The response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A request URL could not be built from the base URL.
    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),
}

/// Client for the REST API.
///
/// Cheaply cloneable; the underlying connection pool is shared.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client rooted at `base_url` (e.g. `http://127.0.0.1:4000/api/`).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the HTTP client cannot be built.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            inner: Arc::new(ApiClientInner { client, base_url }),
        })
    }

    /// The base URL every request is resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// `GET /{path}` - the whole collection, in server order.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body cannot be decoded.
    pub async fn list<T: Resource>(&self) -> Result<Vec<T>, ApiError> {
        let body = self.send::<()>(Method::GET, T::PATH, None).await?;
        decode(&body)
    }

    /// `GET /{path}/{id}` - the entity, or `None` when the API answers `null`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body cannot be decoded.
    pub async fn get<T: Resource>(&self, id: T::Id) -> Result<Option<T>, ApiError> {
        let body = self
            .send::<()>(Method::GET, &member_path::<T>(id), None)
            .await?;
        decode(&body)
    }

    /// `POST /{path}` - create and return the persisted entity.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body cannot be decoded.
    pub async fn create<T: Resource>(&self, payload: &T::Payload) -> Result<T, ApiError> {
        let body = self.send(Method::POST, T::PATH, Some(payload)).await?;
        decode(&body)
    }

    /// `PUT /{path}/{id}` - update and return the persisted entity.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the entity does not exist.
    pub async fn update<T: Resource>(
        &self,
        id: T::Id,
        payload: &T::Payload,
    ) -> Result<T, ApiError> {
        let body = self
            .send(Method::PUT, &member_path::<T>(id), Some(payload))
            .await?;
        decode(&body)
    }

    /// `DELETE /{path}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the entity does not exist.
    pub async fn delete<T: Resource>(&self, id: T::Id) -> Result<(), ApiError> {
        self.send::<()>(Method::DELETE, &member_path::<T>(id), None)
            .await?;
        Ok(())
    }

    /// `POST /users/login` - resolve an email to a user record.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if no user has this email.
    pub async fn login(&self, email: &Email) -> Result<User, ApiError> {
        let request = LoginRequest {
            email: email.clone(),
        };
        let body = self
            .send(Method::POST, "users/login", Some(&request))
            .await?;
        decode(&body)
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&B>,
    ) -> Result<String, ApiError> {
        let url = self.inner.base_url.join(path)?;

        let mut request = self.inner.client.request(method.clone(), url);
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(
                %method,
                path,
                status = %status,
                body = %body.chars().take(200).collect::<String>(),
                "API returned non-success status"
            );
        }

        check_status(status, body)
    }
}

fn member_path<T: Resource>(id: T::Id) -> String {
    format!("{}/{id}", T::PATH)
}

/// Split a response into its body or the matching `ApiError`.
fn check_status(status: StatusCode, body: String) -> Result<String, ApiError> {
    if status.is_success() {
        Ok(body)
    } else if status == StatusCode::NOT_FOUND {
        Err(ApiError::NotFound)
    } else {
        Err(ApiError::Status { status, body })
    }
}

fn decode<R: DeserializeOwned>(body: &str) -> Result<R, ApiError> {
    Ok(serde_json::from_str(body)?)
}
