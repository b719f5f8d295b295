//! HTTP route handlers for the web layer.
//!
//! Route loaders return either a redirect or a JSON payload for the
//! rendering layer; data-access functions never decide navigation.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (OAuth success target)
//! GET  /404                    - Not-found page (OAuth failure target)
//! GET  /health                 - Health check
//!
//! # Auth
//! GET  /sign-in                - Sign-in loader
//! GET  /auth/google            - Redirect to the provider OAuth handshake
//! POST /logout                 - Terminate the current session
//!
//! # Admin
//! GET  /admin                  - Admin layout loader (route guard)
//!
//! # User directory API
//! GET  /api/users              - Paginated user listing
//! GET  /api/users/{account_id} - Point lookup by account id
//! ```

pub mod admin;
pub mod auth;
pub mod home;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/sign-in", get(auth::sign_in))
        .route("/auth/google", get(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the user directory API router.
pub fn user_api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(users::index))
        .route("/{account_id}", get(users::show))
}

/// Create all routes for the web layer.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page and the named OAuth failure target
        .route("/", get(home::home))
        .route("/404", get(home::not_found))
        // Admin layout behind the route guard
        .route("/admin", get(admin::admin_layout))
        // Auth routes
        .merge(auth_routes())
        // User directory API
        .nest("/api/users", user_api_routes())
}
