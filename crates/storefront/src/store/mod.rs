//! Client-side state container.
//!
//! # Architecture
//!
//! ```text
//! handler ──▶ thunk ──▶ ApiClient ──▶ REST API
//!                │
//!                ▼
//!         Store::dispatch(Action) ──▶ root_reducer ──▶ RootState
//!                                                         │
//! handler ◀── component render ◀── selector ◀─────────────┘
//! ```
//!
//! The `Store` is owned by [`AppState`](crate::state::AppState) and shared by
//! every request. Actions apply in dispatch order; overlapping thunks may
//! finish in any order and the last one to dispatch wins.
//!
//! The cart lives in the visitor's session rather than here; see [`cart`].

pub mod cart;
pub mod category;
pub mod order;
pub mod product;
pub mod resource;
pub mod shipping_info;

use std::sync::{PoisonError, RwLock};

use solemate_core::{Category, Order, Product, ShippingInfo};

pub use resource::{
    ErrorKind, Operation, ResourceAction, ResourceState, StoreError, StoreSlice,
};

/// The whole state tree, one slice per resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootState {
    pub products: ResourceState<Product>,
    pub categories: ResourceState<Category>,
    pub shipping_info: ResourceState<ShippingInfo>,
    pub orders: ResourceState<Order>,
}

/// Every action the store understands, tagged by slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Product(ResourceAction<Product>),
    Category(ResourceAction<Category>),
    ShippingInfo(ResourceAction<ShippingInfo>),
    Order(ResourceAction<Order>),
}

/// Run every slice reducer over one action.
#[must_use]
pub fn root_reducer(state: RootState, action: &Action) -> RootState {
    RootState {
        products: product::reducer(state.products, action),
        categories: category::reducer(state.categories, action),
        shipping_info: shipping_info::reducer(state.shipping_info, action),
        orders: order::reducer(state.orders, action),
    }
}

/// Shared state container.
#[derive(Debug, Default)]
pub struct Store {
    state: RwLock<RootState>,
}

impl Store {
    /// Create a store holding the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action through the root reducer.
    pub fn dispatch(&self, action: Action) {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::take(&mut *guard);
        *guard = root_reducer(previous, &action);
    }

    /// Read from the current state without cloning all of it.
    pub fn select<R>(&self, selector: impl FnOnce(&RootState) -> R) -> R {
        let guard = self.state.read().unwrap_or_else(PoisonError::into_inner);
        selector(&guard)
    }

    /// Snapshot of the whole state tree.
    #[must_use]
    pub fn snapshot(&self) -> RootState {
        self.select(Clone::clone)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use solemate_core::{Category, CategoryId};

    use super::*;

    #[test]
    fn test_dispatch_routes_to_one_slice() {
        let store = Store::new();
        store.dispatch(Action::Category(ResourceAction::Loaded(vec![Category {
            id: CategoryId::new(1),
            name: "womens".to_string(),
        }])));

        let state = store.snapshot();
        assert_eq!(state.categories.items.len(), 1);
        assert_eq!(state.products, ResourceState::default());
        assert_eq!(state.orders, ResourceState::default());
        assert_eq!(state.shipping_info, ResourceState::default());
    }

    #[test]
    fn test_select_reads_without_snapshot() {
        let store = Store::new();
        store.dispatch(Action::Category(ResourceAction::Added(Category {
            id: CategoryId::new(3),
            name: "dress".to_string(),
        })));
        let names: Vec<String> =
            store.select(|s| s.categories.items.iter().map(|c| c.name.clone()).collect());
        assert_eq!(names, vec!["dress".to_string()]);
    }
}
