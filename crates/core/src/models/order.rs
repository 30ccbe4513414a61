//! Completed orders.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::resource::Resource;
use crate::types::OrderId;

/// An order recorded at checkout. Read-only once created, apart from admin
/// corrections through `PUT`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub price: Decimal,
    pub quantity: i32,
    pub time_ordered: DateTime<Utc>,
}

/// Body for creating an order. The server stamps `time_ordered` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub price: Decimal,
    pub quantity: i32,
    #[serde(default)]
    pub time_ordered: Option<DateTime<Utc>>,
}

impl Resource for Order {
    type Id = OrderId;
    type Payload = NewOrder;

    const PATH: &'static str = "orders";
    const NAME: &'static str = "order";

    fn id(&self) -> OrderId {
        self.id
    }
}
