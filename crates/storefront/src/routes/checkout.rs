//! Checkout route handlers.
//!
//! Placing an order is two independent API writes: the order, then the
//! shipping info pointing at it. If the second write fails the order stays
//! recorded and the cart is kept so the shopper can retry.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use solemate_core::{NewOrder, NewShippingInfo, OrderId};

use crate::error::Result;
use crate::filters;
use crate::middleware::{CurrentUser, OptionalUser};
use crate::routes::cart::{load_cart, update_cart};
use crate::state::AppState;
use crate::store::cart::{CartAction, CartState};
use crate::store::{order, shipping_info};

/// Shipping form data.
#[derive(Debug, Deserialize)]
pub struct ShippingForm {
    pub full_name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl ShippingForm {
    fn into_payload(self, order_id: OrderId) -> NewShippingInfo {
        NewShippingInfo {
            full_name: self.full_name,
            street: self.street,
            city: self.city,
            state: self.state,
            zip: self.zip,
            order_id: Some(order_id),
        }
    }
}

/// The order a cart turns into.
fn order_payload(cart: &CartState) -> NewOrder {
    NewOrder {
        price: cart.total(),
        quantity: i32::try_from(cart.item_count()).unwrap_or(i32::MAX),
        time_ordered: None,
    }
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub user: Option<CurrentUser>,
    pub cart: CartState,
}

/// Display the shipping form.
#[instrument(skip(session, user))]
pub async fn show(session: Session, OptionalUser(user): OptionalUser) -> Result<Response> {
    let cart = load_cart(&session).await?;
    if cart.is_empty() {
        return Ok(Redirect::to("/cart").into_response());
    }
    Ok(CheckoutTemplate { user, cart }.into_response())
}

/// Place the order, attach shipping info, empty the cart.
#[instrument(skip(state, session, form))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ShippingForm>,
) -> Result<Redirect> {
    let cart = load_cart(&session).await?;
    if cart.is_empty() {
        return Ok(Redirect::to("/cart"));
    }

    let placed = order::create_order(state.api(), state.store(), &order_payload(&cart)).await?;
    tracing::info!(order_id = %placed.id, total = %placed.price, "order placed");

    shipping_info::create_shipping_info(state.api(), state.store(), &form.into_payload(placed.id))
        .await?;

    update_cart(&session, CartAction::Clear).await?;
    Ok(Redirect::to(&format!("/orders/{}", placed.id)))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use solemate_core::{DEFAULT_PHOTO_URL, Product, ProductId};

    use super::*;
    use crate::store::cart::reduce;

    #[test]
    fn test_order_payload_uses_cart_totals() {
        let shoe = Product {
            id: ProductId::new(1),
            name: "Christian Louboutin".to_string(),
            description: String::new(),
            price: Decimal::new(800, 0),
            photo_url: DEFAULT_PHOTO_URL.to_string(),
            in_stock: true,
            category_id: None,
        };
        let cart = reduce(CartState::default(), CartAction::Add(shoe.clone()));
        let cart = reduce(cart, CartAction::Add(shoe));

        let payload = order_payload(&cart);
        assert_eq!(payload.price, Decimal::new(1600, 0));
        assert_eq!(payload.quantity, 2);
        assert!(payload.time_ordered.is_none());
    }

    #[test]
    fn test_shipping_payload_links_order() {
        let form = ShippingForm {
            full_name: "Cody Codes".to_string(),
            street: "1 Main St".to_string(),
            city: "Chicago".to_string(),
            state: "IL".to_string(),
            zip: "60601".to_string(),
        };
        let payload = form.into_payload(OrderId::new(9));
        assert_eq!(payload.order_id, Some(OrderId::new(9)));
        assert_eq!(payload.city, "Chicago");
    }
}
