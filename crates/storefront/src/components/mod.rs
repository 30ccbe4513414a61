//! Reusable view components.
//!
//! Components are pure: they take data already selected from the store or
//! session and render an HTML fragment. Pages embed the fragment.

pub mod edit_product;
pub mod order_summary;
pub mod product_list;

pub use edit_product::{EditProductForm, EditProductState, EditProductView};
pub use order_summary::OrderSummary;
pub use product_list::{ListCallbacks, ListEntry, ProductCard, ProductList};
