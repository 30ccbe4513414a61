//! Category route handlers.
//!
//! Everyone can browse categories; only admins see and use the forms.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::Redirect,
};
use serde::Deserialize;
use tracing::instrument;

use solemate_core::{Category, CategoryId, NewCategory};

use crate::components::{ListCallbacks, ProductList};
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::{CurrentUser, OptionalUser, RequireAdmin, is_admin};
use crate::routes::{MessageQuery, redirect_after};
use crate::state::AppState;
use crate::store::resource::Operation;
use crate::store::{category, product};

/// Create/rename form data.
#[derive(Debug, Deserialize)]
pub struct CategoryForm {
    pub name: String,
}

impl From<CategoryForm> for NewCategory {
    fn from(form: CategoryForm) -> Self {
        Self {
            name: form.name.trim().to_string(),
        }
    }
}

/// Category listing template.
#[derive(Template, WebTemplate)]
#[template(path = "categories/index.html")]
pub struct CategoriesIndexTemplate {
    pub user: Option<CurrentUser>,
    pub is_admin: bool,
    pub categories: Vec<Category>,
    pub error: Option<String>,
}

/// Products-in-category template.
#[derive(Template, WebTemplate)]
#[template(path = "categories/show.html")]
pub struct CategoryShowTemplate {
    pub user: Option<CurrentUser>,
    pub category: Category,
    pub product_list: String,
}

/// Display all categories.
///
/// A failed admin action arrives as `?error=`; otherwise a failed fetch shows
/// the error recorded in the slice.
#[instrument(skip(state, user))]
pub async fn index(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    Query(query): Query<MessageQuery>,
) -> Result<CategoriesIndexTemplate> {
    let _ = category::fetch_categories(state.api(), state.store()).await;

    let (categories, fetch_error) = state.store().select(|root| {
        (
            category::categories(root).to_vec(),
            root.categories.error.as_ref().map(ToString::to_string),
        )
    });
    let error = query.error.or(fetch_error);

    Ok(CategoriesIndexTemplate {
        is_admin: is_admin(user.as_ref()),
        user,
        categories,
        error,
    })
}

/// Display the products of one category; out-of-stock ones as placeholders.
#[instrument(skip(state, user))]
pub async fn show(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    Path(id): Path<CategoryId>,
) -> Result<CategoryShowTemplate> {
    let found = category::fetch_category(state.api(), state.store(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("category {id}")))?;
    product::fetch_products(state.api(), state.store()).await?;

    let products = state.store().select(|root| {
        product::products(root)
            .iter()
            .filter(|p| p.category_id == Some(id))
            .cloned()
            .collect::<Vec<_>>()
    });
    let product_list =
        ProductList::new(&products, is_admin(user.as_ref()), ListCallbacks::default()).render()?;

    Ok(CategoryShowTemplate {
        user,
        category: found,
        product_list,
    })
}

/// Create a category.
#[instrument(skip(state, admin), fields(user_id = %admin.id))]
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Form(form): Form<CategoryForm>,
) -> Redirect {
    let result = category::create_category(state.api(), state.store(), &form.into()).await;
    redirect_after("/categories", Operation::Create, result)
}

/// Rename a category.
#[instrument(skip(state, admin), fields(user_id = %admin.id))]
pub async fn rename(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<CategoryId>,
    Form(form): Form<CategoryForm>,
) -> Redirect {
    let result = category::update_category(state.api(), state.store(), id, &form.into()).await;
    redirect_after("/categories", Operation::Update, result)
}

/// Delete a category. Its products become uncategorised.
#[instrument(skip(state, admin), fields(user_id = %admin.id))]
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<CategoryId>,
) -> Redirect {
    let result = category::delete_category(state.api(), state.store(), id).await;
    redirect_after("/categories", Operation::Delete, result)
}
