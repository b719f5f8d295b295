//! Admin layout loader and its route guard.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde_json::Value;

use wayfarer_core::UserStatus;

use crate::middleware::SessionToken;
use crate::services::{BackendError, auth, users};
use crate::state::AppState;

/// Admin layout loader.
///
/// Resolves the caller to a full profile document, creating one on first
/// sign-in. Callers without an identity go to sign-in; callers whose profile
/// carries the plain `user` status are sent home. Without a configured
/// backend the layout renders with no profile data.
///
/// # Route
///
/// `GET /admin`
pub async fn admin_layout(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> Response {
    let services = state.services();

    let identity = match services.account().current_identity(token.as_deref()).await {
        Ok(identity) => identity,
        Err(BackendError::Unavailable) => return Json(Value::Null).into_response(),
        Err(BackendError::Unauthenticated) => return Redirect::to("/sign-in").into_response(),
        Err(error) => {
            tracing::error!(%error, "failed to resolve identity for admin layout");
            return Redirect::to("/sign-in").into_response();
        }
    };

    match users::get_existing_user(services, &identity.account_id).await {
        Some(profile) if profile.status == Some(UserStatus::User) => {
            Redirect::to("/").into_response()
        }
        Some(profile) => Json(profile).into_response(),
        None => match auth::store_user_data(services, token.as_deref()).await {
            Some(profile) => Json(profile).into_response(),
            None => Redirect::to("/sign-in").into_response(),
        },
    }
}
