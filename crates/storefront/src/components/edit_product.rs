//! Update-product form flow.
//!
//! The page fetches the product for the route id, then decides what to show by
//! comparing the route id with what came back. The route segment is parsed
//! into a [`ProductId`]; a segment that is not a number never matches anything.

use askama::Template;
use rust_decimal::Decimal;
use serde::Deserialize;

use solemate_core::{NewProduct, Product, ProductId};

/// What the edit page can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditProductState {
    /// Nothing loaded yet.
    Loading,
    /// The loaded product is the one the route asks for.
    Ready(Product),
    /// The loaded product belongs to another id, or the route id is invalid.
    Mismatched,
}

impl EditProductState {
    #[must_use]
    pub fn resolve(route_id: &str, current: Option<&Product>) -> Self {
        let Ok(id) = route_id.parse::<ProductId>() else {
            return Self::Mismatched;
        };
        match current {
            None => Self::Loading,
            Some(product) if product.id == id => Self::Ready(product.clone()),
            Some(_) => Self::Mismatched,
        }
    }

    #[must_use]
    pub const fn product(&self) -> Option<&Product> {
        match self {
            Self::Ready(product) => Some(product),
            Self::Loading | Self::Mismatched => None,
        }
    }
}

/// Submitted edit form.
#[derive(Debug, Clone, Deserialize)]
pub struct EditProductForm {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub photo_url: String,
}

impl EditProductForm {
    /// Build the update payload. Stock and category are left as stored.
    #[must_use]
    pub fn into_payload(self) -> NewProduct {
        let photo_url = Some(self.photo_url).filter(|url| !url.trim().is_empty());
        NewProduct {
            name: self.name,
            description: self.description,
            price: self.price,
            photo_url,
            in_stock: None,
            category_id: None,
        }
    }
}

/// The edit form, prefilled from a ready product.
#[derive(Template)]
#[template(path = "components/edit_product.html")]
pub struct EditProductView<'a> {
    pub product: &'a Product,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use solemate_core::DEFAULT_PHOTO_URL;

    use super::*;

    fn shoe(id: i32) -> Product {
        Product {
            id: ProductId::new(id),
            name: "Nike".to_string(),
            description: "A more moderate shoe".to_string(),
            price: Decimal::new(70, 0),
            photo_url: DEFAULT_PHOTO_URL.to_string(),
            in_stock: true,
            category_id: None,
        }
    }

    #[test]
    fn test_matching_route_id_is_ready() {
        let product = shoe(7);
        assert_eq!(
            EditProductState::resolve("7", Some(&product)),
            EditProductState::Ready(product.clone())
        );
        assert_eq!(
            EditProductState::resolve("07", Some(&product)),
            EditProductState::Ready(product)
        );
    }

    #[test]
    fn test_nothing_loaded_is_loading() {
        assert_eq!(EditProductState::resolve("7", None), EditProductState::Loading);
    }

    #[test]
    fn test_other_product_is_mismatched() {
        assert_eq!(
            EditProductState::resolve("8", Some(&shoe(7))),
            EditProductState::Mismatched
        );
    }

    #[test]
    fn test_non_numeric_route_is_mismatched() {
        assert_eq!(
            EditProductState::resolve("abc", Some(&shoe(7))),
            EditProductState::Mismatched
        );
        assert_eq!(EditProductState::resolve("abc", None), EditProductState::Mismatched);
        assert_eq!(EditProductState::resolve("", None), EditProductState::Mismatched);
    }

    #[test]
    fn test_form_payload_keeps_stock_and_category() {
        let form = EditProductForm {
            name: "Nike Air".to_string(),
            description: "Lighter".to_string(),
            price: Decimal::new(7500, 2),
            photo_url: "  ".to_string(),
        };
        let payload = form.into_payload();
        assert_eq!(payload.name, "Nike Air");
        assert_eq!(payload.price, Decimal::new(7500, 2));
        assert_eq!(payload.photo_url, None);
        assert_eq!(payload.in_stock, None);
        assert_eq!(payload.category_id, None);
    }

    #[test]
    fn test_view_prefills_fields() {
        let product = shoe(7);
        let html = EditProductView { product: &product }.render().unwrap();
        assert!(html.contains(r#"value="Nike""#));
        assert!(html.contains(r#"action="/products/7/edit""#));
        assert!(html.contains(r#"value="70""#));
    }
}
