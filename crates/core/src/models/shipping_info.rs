//! Delivery destinations captured at checkout.

use serde::{Deserialize, Serialize};

use crate::resource::Resource;
use crate::types::{OrderId, ShippingInfoId};

/// Where an order is shipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    pub id: ShippingInfoId,
    pub full_name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub order_id: Option<OrderId>,
}

/// Body for creating or updating shipping info.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShippingInfo {
    pub full_name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    #[serde(default)]
    pub order_id: Option<OrderId>,
}

impl Resource for ShippingInfo {
    type Id = ShippingInfoId;
    type Payload = NewShippingInfo;

    // Mixed case matches the public endpoint (`/api/shippingInfo`).
    const PATH: &'static str = "shippingInfo";
    const NAME: &'static str = "shipping_info";

    fn id(&self) -> ShippingInfoId {
        self.id
    }
}
