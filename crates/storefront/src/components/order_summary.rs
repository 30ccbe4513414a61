//! Read-only summary of one order.

use askama::Template;

use solemate_core::{Order, ShippingInfo};

use crate::filters;
use crate::middleware::CurrentUser;

#[derive(Template)]
#[template(path = "components/order_summary.html")]
pub struct OrderSummary<'a> {
    pub order: &'a Order,
    pub shipping: Option<&'a ShippingInfo>,
    pub user: Option<&'a CurrentUser>,
}

impl OrderSummary<'_> {
    /// `timeOrdered` as shown to shoppers.
    #[must_use]
    pub fn time_ordered(&self) -> String {
        self.order
            .time_ordered
            .format("%B %-d, %Y at %H:%M UTC")
            .to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use solemate_core::{Email, OrderId, ShippingInfoId, UserId};

    use super::*;

    fn order() -> Order {
        Order {
            id: OrderId::new(5),
            price: Decimal::new(2300, 0),
            quantity: 2,
            time_ordered: Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_renders_price_quantity_and_time() {
        let order = order();
        let html = OrderSummary {
            order: &order,
            shipping: None,
            user: None,
        }
        .render()
        .unwrap();

        assert!(html.contains("$2300.00"));
        assert!(html.contains("<dd>2</dd>"));
        assert!(html.contains("March 1, 2026 at 12:30 UTC"));
        assert!(!html.contains("Ordered by"));
    }

    #[test]
    fn test_shows_user_and_destination() {
        let order = order();
        let user = CurrentUser {
            id: UserId::new(2),
            email: Email::parse("murphy@email.com").unwrap(),
            is_admin: false,
        };
        let shipping = ShippingInfo {
            id: ShippingInfoId::new(1),
            full_name: "Murphy Murph".to_string(),
            street: "5 Elm St".to_string(),
            city: "Chicago".to_string(),
            state: "IL".to_string(),
            zip: "60601".to_string(),
            order_id: Some(order.id),
        };
        let html = OrderSummary {
            order: &order,
            shipping: Some(&shipping),
            user: Some(&user),
        }
        .render()
        .unwrap();

        assert!(html.contains("murphy@email.com"));
        assert!(html.contains("Murphy Murph"));
        assert!(html.contains("Chicago, IL 60601"));
    }
}
