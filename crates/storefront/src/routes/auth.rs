//! Authentication route handlers.
//!
//! Login is a lookup by email against the API; there are no credentials.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::Redirect,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use solemate_core::Email;

use crate::api_client::ApiError;
use crate::error::{Result, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::{CurrentUser, OptionalUser, clear_current_user, set_current_user};
use crate::routes::MessageQuery;
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub user: Option<CurrentUser>,
    pub error: Option<String>,
}

fn error_message(code: &str) -> Option<String> {
    match code {
        "invalid_email" => Some("Enter a valid email address.".to_string()),
        "unknown_user" => Some("No account uses that email.".to_string()),
        _ => None,
    }
}

/// Display login page.
#[instrument(skip(user))]
pub async fn login_page(
    OptionalUser(user): OptionalUser,
    Query(query): Query<MessageQuery>,
) -> LoginTemplate {
    LoginTemplate {
        user,
        error: query.error.as_deref().and_then(error_message),
    }
}

/// Bind the user with this email to the session.
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Redirect> {
    let Ok(email) = Email::parse(&form.email) else {
        return Ok(Redirect::to("/auth/login?error=invalid_email"));
    };

    let user = match state.api().login(&email).await {
        Ok(user) => user,
        Err(ApiError::NotFound) => return Ok(Redirect::to("/auth/login?error=unknown_user")),
        Err(e) => return Err(e.into()),
    };

    // New identity, new session id
    session.cycle_id().await?;
    let current = CurrentUser::from(user);
    set_current_user(&session, &current).await?;
    set_sentry_user(&current.id, current.email.as_str());

    tracing::info!(user_id = %current.id, is_admin = current.is_admin, "user logged in");
    Ok(Redirect::to("/products"))
}

/// Clear the session user.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Redirect> {
    clear_current_user(&session).await?;
    clear_sentry_user();
    Ok(Redirect::to("/products"))
}
