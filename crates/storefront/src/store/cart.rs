//! Session-scoped shopping cart.
//!
//! The cart follows the same reducer discipline as the resource slices but
//! is stored per visitor in the session instead of in the shared [`Store`](super::Store).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use solemate_core::{Product, ProductId};

/// One product and how many of it are in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Contents of a visitor's cart, in the order products were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    pub lines: Vec<CartLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit; increments the line if the product is already present.
    Add(Product),
    /// Drop the whole line for a product.
    Remove(ProductId),
    /// Empty the cart.
    Clear,
}

impl CartState {
    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of every line total.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Fold one action into the cart.
#[must_use]
pub fn reduce(mut state: CartState, action: CartAction) -> CartState {
    match action {
        CartAction::Add(product) => {
            match state
                .lines
                .iter_mut()
                .find(|line| line.product.id == product.id)
            {
                Some(line) => {
                    line.quantity = line.quantity.saturating_add(1);
                    line.product = product;
                }
                None => state.lines.push(CartLine {
                    product,
                    quantity: 1,
                }),
            }
        }
        CartAction::Remove(id) => state.lines.retain(|line| line.product.id != id),
        CartAction::Clear => state.lines.clear(),
    }
    state
}

#[cfg(test)]
mod tests {
    use solemate_core::DEFAULT_PHOTO_URL;

    use super::*;

    fn shoe(id: i32, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Shoe {id}"),
            description: String::new(),
            price: Decimal::new(price, 0),
            photo_url: DEFAULT_PHOTO_URL.to_string(),
            in_stock: true,
            category_id: None,
        }
    }

    #[test]
    fn test_adding_twice_increments_one_line() {
        let cart = reduce(CartState::default(), CartAction::Add(shoe(1, 1500)));
        let cart = reduce(cart, CartAction::Add(shoe(1, 1500)));

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 2);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total(), Decimal::new(3000, 0));
    }

    #[test]
    fn test_totals_sum_price_times_quantity() {
        let cart = [shoe(1, 1500), shoe(2, 800), shoe(2, 800), shoe(3, 70)]
            .into_iter()
            .fold(CartState::default(), |cart, p| reduce(cart, CartAction::Add(p)));

        assert_eq!(cart.item_count(), 4);
        assert_eq!(cart.total(), Decimal::new(3170, 0));
    }

    #[test]
    fn test_remove_and_clear() {
        let cart = reduce(CartState::default(), CartAction::Add(shoe(1, 1500)));
        let cart = reduce(cart, CartAction::Add(shoe(3, 70)));

        let cart = reduce(cart, CartAction::Remove(ProductId::new(1)));
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.total(), Decimal::new(70, 0));

        let cart = reduce(cart, CartAction::Clear);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_session_round_trip() {
        let cart = reduce(CartState::default(), CartAction::Add(shoe(1, 1500)));
        let json = serde_json::to_string(&cart).unwrap_or_default();
        let back: Option<CartState> = serde_json::from_str(&json).ok();
        assert_eq!(back, Some(cart));
    }
}
