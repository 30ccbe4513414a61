//! Catalog products.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::resource::Resource;
use crate::types::{CategoryId, ProductId};

/// Photo shown when a product is created without one.
pub const DEFAULT_PHOTO_URL: &str = "defaultShoe.png";

/// A product as persisted by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub photo_url: String,
    pub in_stock: bool,
    pub category_id: Option<CategoryId>,
}

/// Fields accepted when creating or updating a product.
///
/// On update, `None` for `in_stock` or `category_id` keeps the stored value,
/// so an edit form that only carries name/description/price/photo does not
/// reset stock or category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub in_stock: Option<bool>,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
}

impl Resource for Product {
    type Id = ProductId;
    type Payload = NewProduct;

    const PATH: &'static str = "products";
    const NAME: &'static str = "product";

    fn id(&self) -> ProductId {
        self.id
    }
}
