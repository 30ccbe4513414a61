//! Cart route handlers.
//!
//! The cart is kept in the visitor's session and changed only through
//! [`cart::reduce`].

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::Redirect,
};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::session::keys;
use crate::middleware::{CurrentUser, OptionalUser};
use crate::routes::products::ProductIdForm;
use crate::state::AppState;
use crate::store::cart::{self, CartAction, CartState};
use crate::store::product;

/// Read the cart from the session, empty if none was saved.
pub(crate) async fn load_cart(session: &Session) -> Result<CartState> {
    Ok(session.get::<CartState>(keys::CART).await?.unwrap_or_default())
}

/// Apply an action to the session cart and save the result.
pub(crate) async fn update_cart(session: &Session, action: CartAction) -> Result<CartState> {
    let next = cart::reduce(load_cart(session).await?, action);
    session.insert(keys::CART, &next).await?;
    Ok(next)
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub user: Option<CurrentUser>,
    pub cart: CartState,
}

/// Display cart page.
#[instrument(skip(session, user))]
pub async fn show(session: Session, OptionalUser(user): OptionalUser) -> Result<CartShowTemplate> {
    Ok(CartShowTemplate {
        user,
        cart: load_cart(&session).await?,
    })
}

/// Add one unit of a product (list callback).
///
/// The line stores the product as the API returns it right now.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ProductIdForm>,
) -> Result<Redirect> {
    let product = product::fetch_product(state.api(), state.store(), form.product_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    let cart = update_cart(&session, CartAction::Add(product)).await?;
    tracing::debug!(items = cart.item_count(), "cart updated");
    Ok(Redirect::to("/cart"))
}

/// Remove a product's line.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<ProductIdForm>) -> Result<Redirect> {
    update_cart(&session, CartAction::Remove(form.product_id)).await?;
    Ok(Redirect::to("/cart"))
}
