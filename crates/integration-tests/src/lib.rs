//! Integration tests for Solemate.
//!
//! Every test serves a fresh API, backed by its own in-memory `SQLite`
//! database, on an ephemeral port. Tests then talk to it the way the
//! storefront does: through [`ApiClient`] and the store thunks, or through a
//! real storefront served in front of it.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p solemate-integration-tests
//! ```

use std::net::SocketAddr;
use std::time::Duration;

use solemate_api::db::{UserRepository, create_memory_pool};
use solemate_core::{Email, NewUser};
use solemate_storefront::api_client::ApiClient;
use solemate_storefront::state::AppState as StorefrontState;
use solemate_storefront::store::Store;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use url::Url;

/// A running API with a client and an empty store pointed at it.
pub struct TestContext {
    pub api_addr: SocketAddr,
    pub pool: SqlitePool,
    pub client: ApiClient,
    pub store: Store,
}

impl TestContext {
    /// Serve a fresh API and connect a client to it.
    ///
    /// # Panics
    ///
    /// Panics if the database or listener cannot be set up.
    pub async fn new() -> Self {
        let pool = create_memory_pool().await.expect("in-memory database");
        let app = solemate_api::app(solemate_api::state::AppState::new(pool.clone()));
        let api_addr = serve(app).await;

        let client = ApiClient::new(api_url(api_addr), Duration::from_secs(5)).expect("client");

        Self {
            api_addr,
            pool,
            client,
            store: Store::new(),
        }
    }

    /// Insert a user straight into the database.
    ///
    /// # Panics
    ///
    /// Panics if the email is invalid or already taken.
    pub async fn add_user(&self, email: &str, is_admin: bool) {
        UserRepository::new(&self.pool)
            .create(&NewUser {
                email: Email::parse(email).expect("valid email"),
                is_admin,
            })
            .await
            .expect("user created");
    }

    /// Serve a storefront in front of this API and return its base URL.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn spawn_storefront(&self) -> String {
        let client = ApiClient::new(api_url(self.api_addr), Duration::from_secs(5)).expect("client");
        let app = solemate_storefront::app(StorefrontState::with_client(client, false));
        let addr = serve(app).await;
        format!("http://{addr}")
    }
}

/// The `/api/` base URL of a served API.
fn api_url(addr: SocketAddr) -> Url {
    Url::parse(&format!("http://{addr}/api/")).expect("valid url")
}

/// Serve a router on an ephemeral local port.
async fn serve(app: axum::Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    addr
}
