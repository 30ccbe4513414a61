//! HTTP route handlers for the REST API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                   - Liveness check
//! GET    /health/ready             - Readiness check (database)
//!
//! GET    /api/products             - List products
//! POST   /api/products             - Create product
//! GET    /api/products/{id}        - Product or null
//! PUT    /api/products/{id}        - Update product
//! DELETE /api/products/{id}        - Delete product
//!
//! (same five routes for /api/categories, /api/orders, /api/shippingInfo)
//!
//! POST   /api/users                - Create user
//! GET    /api/users/{id}           - User or null
//! POST   /api/users/login          - Resolve an email to a user
//! ```

pub mod categories;
pub mod orders;
pub mod products;
pub mod shipping_info;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};
use solemate_core::{Category, Order, Product, Resource, ShippingInfo};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route(
            "/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::destroy),
        )
}

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::index).post(categories::create))
        .route(
            "/{id}",
            get(categories::show)
                .put(categories::update)
                .delete(categories::destroy),
        )
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index).post(orders::create))
        .route(
            "/{id}",
            get(orders::show)
                .put(orders::update)
                .delete(orders::destroy),
        )
}

/// Create the shipping info routes router.
pub fn shipping_info_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(shipping_info::index).post(shipping_info::create))
        .route(
            "/{id}",
            get(shipping_info::show)
                .put(shipping_info::update)
                .delete(shipping_info::destroy),
        )
}

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(users::create))
        .route("/login", post(users::login))
        .route("/{id}", get(users::show))
}

/// Create all `/api` routes.
pub fn routes() -> Router<AppState> {
    let api = Router::new()
        .nest(&format!("/{}", Product::PATH), product_routes())
        .nest(&format!("/{}", Category::PATH), category_routes())
        .nest(&format!("/{}", Order::PATH), order_routes())
        .nest(&format!("/{}", ShippingInfo::PATH), shipping_info_routes())
        .nest("/users", user_routes());

    Router::new().nest("/api", api)
}
