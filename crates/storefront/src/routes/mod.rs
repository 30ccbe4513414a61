//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Redirect to /products
//! GET  /health                  - Health check
//!
//! # Products
//! GET  /products                - Product list
//! GET  /products/new            - New product form (admin)
//! POST /products                - Create product (admin)
//! POST /products/delete         - Delete product (admin, list callback)
//! GET  /products/{id}           - Product detail
//! GET  /products/{id}/edit      - Edit form (admin)
//! POST /products/{id}/edit      - Update product (admin)
//!
//! # Categories
//! GET  /categories              - Category list
//! POST /categories              - Create category (admin)
//! GET  /categories/{id}         - Products in a category
//! POST /categories/{id}         - Rename category (admin)
//! POST /categories/{id}/delete  - Delete category (admin)
//!
//! # Cart and checkout
//! GET  /cart                    - Cart page
//! POST /cart/add                - Add to cart (list callback)
//! POST /cart/remove             - Remove a line
//! GET  /checkout                - Shipping form
//! POST /checkout                - Place order
//!
//! # Orders
//! GET  /orders                  - All orders (admin)
//! GET  /orders/{id}             - Order summary
//! POST /orders/{id}/delete      - Cancel order (admin)
//!
//! # Auth
//! GET  /auth/login              - Login page
//! POST /auth/login              - Login action
//! POST /auth/logout             - Logout action
//! ```

pub mod auth;
pub mod cart;
pub mod categories;
pub mod checkout;
pub mod orders;
pub mod products;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use serde::Deserialize;

use crate::api_client::ApiError;
use crate::state::AppState;
use crate::store::resource::{Operation, StoreError};

/// Query parameters for error display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

/// Redirect back to a listing after an admin mutation.
///
/// A failed call carries its display message in `?error=` so the listing
/// can show it.
pub(crate) fn redirect_after<T>(
    path: &str,
    op: Operation,
    result: Result<T, ApiError>,
) -> Redirect {
    match result {
        Ok(_) => Redirect::to(path),
        Err(e) => {
            let message = StoreError::new(op, &e).to_string();
            Redirect::to(&format!("{path}?error={}", urlencoding::encode(&message)))
        }
    }
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route("/new", get(products::new_form))
        .route("/delete", post(products::delete))
        .route("/{id}", get(products::show))
        .route("/{id}/edit", get(products::edit_form).post(products::update))
}

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::index).post(categories::create))
        .route("/{id}", get(categories::show).post(categories::rename))
        .route("/{id}/delete", post(categories::delete))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index))
        .route("/{id}", get(orders::show))
        .route("/{id}/delete", post(orders::delete))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/products") }))
        .nest("/products", product_routes())
        .nest("/categories", category_routes())
        .nest("/cart", cart_routes())
        .route("/checkout", get(checkout::show).post(checkout::submit))
        .nest("/orders", order_routes())
        .nest("/auth", auth_routes())
}
