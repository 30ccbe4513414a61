//! Product list component.
//!
//! A pure function of the products, the viewer's admin flag and the two
//! callbacks. Every product yields exactly one `<li>`; out-of-stock products
//! render as an empty placeholder entry so positions line up with the input.

use askama::Template;
use rust_decimal::Decimal;

use solemate_core::{Product, ProductId};

use crate::filters;

/// Display data for an in-stock product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub photo_url: String,
}

/// One entry of the rendered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEntry {
    InStock(ProductCard),
    /// Placeholder that carries no product data.
    OutOfStock,
}

impl ListEntry {
    #[must_use]
    pub fn card(&self) -> Option<&ProductCard> {
        match self {
            Self::InStock(card) => Some(card),
            Self::OutOfStock => None,
        }
    }
}

impl From<&Product> for ListEntry {
    fn from(product: &Product) -> Self {
        if product.in_stock {
            Self::InStock(ProductCard {
                id: product.id,
                name: product.name.clone(),
                description: product.description.clone(),
                price: product.price,
                photo_url: product.photo_url.clone(),
            })
        } else {
            Self::OutOfStock
        }
    }
}

/// Where the list's controls post to. Both receive a `product_id` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCallbacks {
    pub delete_action: &'static str,
    pub add_to_cart_action: &'static str,
}

impl Default for ListCallbacks {
    fn default() -> Self {
        Self {
            delete_action: "/products/delete",
            add_to_cart_action: "/cart/add",
        }
    }
}

#[derive(Template)]
#[template(path = "components/product_list.html")]
pub struct ProductList {
    pub entries: Vec<ListEntry>,
    pub is_admin: bool,
    pub callbacks: ListCallbacks,
}

impl ProductList {
    #[must_use]
    pub fn new(products: &[Product], is_admin: bool, callbacks: ListCallbacks) -> Self {
        Self {
            entries: products.iter().map(ListEntry::from).collect(),
            is_admin,
            callbacks,
        }
    }
}
