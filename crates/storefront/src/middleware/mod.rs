//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, outermost)
//! 2. `TraceLayer` (request tracing)
//! 3. Session layer (tower-sessions with an in-memory store)

pub mod auth;
pub mod session;

pub use auth::{
    CurrentUser, OptionalUser, RequireAdmin, clear_current_user, is_admin, set_current_user,
};
pub use session::create_session_layer;
