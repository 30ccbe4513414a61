//! Domain entities and the payloads used to create or update them.
//!
//! JSON field names are camelCase (`photoUrl`, `inStock`, `timeOrdered`).
//! Prices are [`rust_decimal::Decimal`]; they serialize as strings and
//! accept either JSON numbers or strings on input.

pub mod category;
pub mod order;
pub mod product;
pub mod shipping_info;
pub mod user;

pub use category::{Category, NewCategory};
pub use order::{NewOrder, Order};
pub use product::{DEFAULT_PHOTO_URL, NewProduct, Product};
pub use shipping_info::{NewShippingInfo, ShippingInfo};
pub use user::{LoginRequest, NewUser, User};
