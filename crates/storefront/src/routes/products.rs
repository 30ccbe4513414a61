//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use solemate_core::{Category, CategoryId, NewProduct, Product, ProductId};

use crate::components::{
    EditProductForm, EditProductState, EditProductView, ListCallbacks, ProductList,
};
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::{CurrentUser, OptionalUser, RequireAdmin, is_admin};
use crate::routes::{MessageQuery, redirect_after};
use crate::state::AppState;
use crate::store::resource::Operation;
use crate::store::{category, product};

/// Form posted by list controls that act on one product.
#[derive(Debug, Deserialize)]
pub struct ProductIdForm {
    pub product_id: ProductId,
}

/// New product form data.
#[derive(Debug, Deserialize)]
pub struct NewProductForm {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub photo_url: String,
    /// Checkbox; present only when ticked.
    pub in_stock: Option<String>,
    /// Select value; empty for "no category".
    #[serde(default)]
    pub category_id: String,
}

impl NewProductForm {
    fn into_payload(self) -> NewProduct {
        NewProduct {
            name: self.name,
            description: self.description,
            price: self.price,
            photo_url: Some(self.photo_url).filter(|url| !url.trim().is_empty()),
            in_stock: Some(self.in_stock.is_some()),
            category_id: self.category_id.parse::<CategoryId>().ok(),
        }
    }
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub user: Option<CurrentUser>,
    pub is_admin: bool,
    pub product_list: String,
    pub error: Option<String>,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub user: Option<CurrentUser>,
    pub is_admin: bool,
    pub product: Product,
}

/// New product page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/new.html")]
pub struct ProductNewTemplate {
    pub user: Option<CurrentUser>,
    pub categories: Vec<Category>,
}

/// Edit product page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/edit.html")]
pub struct ProductEditTemplate {
    pub user: Option<CurrentUser>,
    pub name: String,
    pub form: String,
}

/// Display the product list.
///
/// A failed fetch leaves the previously loaded items in place and shows the
/// error recorded in the slice. A failed admin action arrives as `?error=`
/// and takes precedence.
#[instrument(skip(state, user))]
pub async fn index(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    Query(query): Query<MessageQuery>,
) -> Result<ProductsIndexTemplate> {
    let _ = product::fetch_products(state.api(), state.store()).await;

    let (products, fetch_error) = state.store().select(|root| {
        (
            product::products(root).to_vec(),
            root.products.error.as_ref().map(ToString::to_string),
        )
    });
    let error = query.error.or(fetch_error);

    let is_admin = is_admin(user.as_ref());
    let product_list = ProductList::new(&products, is_admin, ListCallbacks::default()).render()?;

    Ok(ProductsIndexTemplate {
        user,
        is_admin,
        product_list,
        error,
    })
}

/// Display one product.
#[instrument(skip(state, user))]
pub async fn show(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    Path(id): Path<ProductId>,
) -> Result<ProductShowTemplate> {
    let product = product::fetch_product(state.api(), state.store(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(ProductShowTemplate {
        is_admin: is_admin(user.as_ref()),
        user,
        product,
    })
}

/// Display the new product form.
#[instrument(skip(state, admin))]
pub async fn new_form(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> Result<ProductNewTemplate> {
    let categories = category::fetch_categories(state.api(), state.store()).await?;
    Ok(ProductNewTemplate {
        user: Some(admin),
        categories,
    })
}

/// Create a product.
#[instrument(skip(state, admin, form), fields(user_id = %admin.id))]
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Form(form): Form<NewProductForm>,
) -> Redirect {
    let result = product::create_product(state.api(), state.store(), &form.into_payload()).await;
    if let Ok(created) = &result {
        tracing::info!(product_id = %created.id, "product created");
    }
    redirect_after("/products", Operation::Create, result)
}

/// Display the edit form for the product named in the route.
///
/// Resolves against the product fetched for this request, not the shared
/// `current` slot, so concurrent visitors cannot swap it out. Renders an
/// empty `404` when the route id is not a product id.
#[instrument(skip(state, admin))]
pub async fn edit_form(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(route_id): Path<String>,
) -> Result<Response> {
    let fetched = match route_id.parse::<ProductId>() {
        Ok(id) => product::fetch_product(state.api(), state.store(), id).await?,
        Err(_) => None,
    };

    match EditProductState::resolve(&route_id, fetched.as_ref()) {
        EditProductState::Ready(product) => {
            let form = EditProductView { product: &product }.render()?;
            Ok(ProductEditTemplate {
                user: Some(admin),
                name: product.name,
                form,
            }
            .into_response())
        }
        EditProductState::Loading => Err(AppError::NotFound(format!("product {route_id}"))),
        EditProductState::Mismatched => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// Submit the edit form.
#[instrument(skip(state, admin, form), fields(user_id = %admin.id))]
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(route_id): Path<String>,
    Form(form): Form<EditProductForm>,
) -> Result<Response> {
    let Ok(id) = route_id.parse::<ProductId>() else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let result =
        product::update_product(state.api(), state.store(), id, &form.into_payload()).await;
    if result.is_ok() {
        tracing::info!(product_id = %id, "product updated");
    }
    Ok(redirect_after("/products", Operation::Update, result).into_response())
}

/// Delete a product (list callback).
#[instrument(skip(state, admin), fields(user_id = %admin.id))]
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Form(form): Form<ProductIdForm>,
) -> Redirect {
    let result = product::delete_product(state.api(), state.store(), form.product_id).await;
    if result.is_ok() {
        tracing::info!(product_id = %form.product_id, "product deleted");
    }
    redirect_after("/products", Operation::Delete, result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_form_payload() {
        let form = NewProductForm {
            name: "Prada".to_string(),
            description: "another pair of heels".to_string(),
            price: Decimal::new(500, 0),
            photo_url: String::new(),
            in_stock: None,
            category_id: "3".to_string(),
        };
        let payload = form.into_payload();
        assert_eq!(payload.photo_url, None);
        assert_eq!(payload.in_stock, Some(false));
        assert_eq!(payload.category_id, Some(CategoryId::new(3)));
    }

    #[test]
    fn test_blank_category_is_uncategorised() {
        let form = NewProductForm {
            name: "Nike".to_string(),
            description: String::new(),
            price: Decimal::new(70, 0),
            photo_url: "nike.png".to_string(),
            in_stock: Some("on".to_string()),
            category_id: String::new(),
        };
        let payload = form.into_payload();
        assert_eq!(payload.photo_url.as_deref(), Some("nike.png"));
        assert_eq!(payload.in_stock, Some(true));
        assert_eq!(payload.category_id, None);
    }
}
