//! Product slice: operations, reducer and selectors.

use solemate_core::{NewProduct, Product, ProductId};

use super::resource::{self, ResourceAction, ResourceState, StoreSlice};
use super::{Action, RootState, Store};
use crate::api_client::{ApiClient, ApiError};

pub type ProductState = ResourceState<Product>;

impl StoreSlice for Product {
    fn wrap(action: ResourceAction<Self>) -> Action {
        Action::Product(action)
    }

    fn slice(state: &RootState) -> &ResourceState<Self> {
        &state.products
    }
}

/// Product slice reducer. Actions for other slices pass through untouched.
#[must_use]
pub fn reducer(state: ProductState, action: &Action) -> ProductState {
    match action {
        Action::Product(action) => resource::reduce(state, action),
        Action::Category(_) | Action::ShippingInfo(_) | Action::Order(_) => state,
    }
}

/// # Errors
///
/// Returns `ApiError` if the request fails.
pub async fn fetch_products(api: &ApiClient, store: &Store) -> Result<Vec<Product>, ApiError> {
    resource::fetch_all(api, store).await
}

/// # Errors
///
/// Returns `ApiError` if the request fails.
pub async fn fetch_product(
    api: &ApiClient,
    store: &Store,
    id: ProductId,
) -> Result<Option<Product>, ApiError> {
    resource::fetch_one(api, store, id).await
}

/// # Errors
///
/// Returns `ApiError` if the request fails.
pub async fn create_product(
    api: &ApiClient,
    store: &Store,
    payload: &NewProduct,
) -> Result<Product, ApiError> {
    resource::create(api, store, payload).await
}

/// # Errors
///
/// Returns `ApiError::NotFound` if the product no longer exists.
pub async fn update_product(
    api: &ApiClient,
    store: &Store,
    id: ProductId,
    payload: &NewProduct,
) -> Result<Product, ApiError> {
    resource::update(api, store, id, payload).await
}

/// # Errors
///
/// Returns `ApiError::NotFound` if the product no longer exists.
pub async fn delete_product(api: &ApiClient, store: &Store, id: ProductId) -> Result<(), ApiError> {
    resource::delete::<Product>(api, store, id).await
}

/// All loaded products, in server order.
#[must_use]
pub fn products(state: &RootState) -> &[Product] {
    &Product::slice(state).items
}

/// The product held in the single-item slot.
#[must_use]
pub fn current_product(state: &RootState) -> Option<&Product> {
    Product::slice(state).current.as_ref()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use solemate_core::{Category, CategoryId, DEFAULT_PHOTO_URL};

    use super::*;
    use crate::store::root_reducer;

    fn shoe(id: i32, name: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: format!("{name} description"),
            price: Decimal::new(price, 0),
            photo_url: DEFAULT_PHOTO_URL.to_string(),
            in_stock: true,
            category_id: None,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            shoe(1, "Air Jordans", 1500),
            shoe(2, "Christian Louboutin", 800),
            shoe(3, "Nike", 70),
        ]
    }

    fn loaded() -> ProductState {
        reducer(
            ProductState::default(),
            &Action::Product(ResourceAction::Loaded(catalog())),
        )
    }

    #[test]
    fn test_fetch_all_replaces_items_in_server_order() {
        let state = loaded();
        assert_eq!(state.items, catalog());

        let reversed: Vec<Product> = catalog().into_iter().rev().collect();
        let state = reducer(
            state,
            &Action::Product(ResourceAction::Loaded(reversed.clone())),
        );
        assert_eq!(state.items, reversed);
    }

    #[test]
    fn test_fetch_all_is_idempotent() {
        let once = loaded();
        let twice = reducer(
            once.clone(),
            &Action::Product(ResourceAction::Loaded(catalog())),
        );
        assert_eq!(once, twice);
    }

    #[test]
    fn test_update_replaces_exactly_one_item() {
        let mut edited = shoe(2, "Christian Louboutin", 850);
        edited.description = "Red soles".to_string();

        let state = reducer(
            loaded(),
            &Action::Product(ResourceAction::Updated(edited.clone())),
        );

        assert_eq!(state.items.len(), 3);
        assert_eq!(state.items[0], shoe(1, "Air Jordans", 1500));
        assert_eq!(state.items[1], edited);
        assert_eq!(state.items[2], shoe(3, "Nike", 70));
    }

    #[test]
    fn test_delete_preserves_relative_order() {
        let state = reducer(
            loaded(),
            &Action::Product(ResourceAction::Removed(ProductId::new(2))),
        );
        let names: Vec<&str> = state.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Air Jordans", "Nike"]);
    }

    #[test]
    fn test_create_appends_server_copy() {
        let prada = shoe(4, "Prada", 500);
        let state = reducer(
            loaded(),
            &Action::Product(ResourceAction::Added(prada.clone())),
        );
        assert_eq!(state.items.last(), Some(&prada));
    }

    #[test]
    fn test_foreign_actions_leave_slice_unchanged() {
        let state = loaded();
        let after = reducer(
            state.clone(),
            &Action::Category(ResourceAction::Added(Category {
                id: CategoryId::new(1),
                name: "womens".to_string(),
            })),
        );
        assert_eq!(after, state);
    }

    #[test]
    fn test_selectors() {
        let mut root = RootState::default();
        root = root_reducer(root, &Action::Product(ResourceAction::Loaded(catalog())));
        root = root_reducer(
            root,
            &Action::Product(ResourceAction::LoadedOne(Some(shoe(3, "Nike", 70)))),
        );

        assert_eq!(products(&root).len(), 3);
        assert_eq!(current_product(&root).unwrap().name, "Nike");
    }
}
