//! Sign-in, OAuth handshake entry, and logout.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;

use crate::middleware::SessionToken;
use crate::services::auth::{self, SessionOutcome};
use crate::state::AppState;

/// Sign-in page loader.
///
/// An already-authenticated caller is sent home; everyone else gets the
/// sign-in payload.
///
/// # Route
///
/// `GET /sign-in`
pub async fn sign_in(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> Response {
    match auth::get_user(state.services(), token.as_deref()).await {
        SessionOutcome::Authenticated(_) => Redirect::to("/").into_response(),
        SessionOutcome::Unauthenticated
        | SessionOutcome::ProfileMissing
        | SessionOutcome::Failed => Json(json!({
            "provider": "google",
            "loginUrl": "/auth/google",
        }))
        .into_response(),
    }
}

/// Start the provider OAuth handshake.
///
/// Success lands on the home page, failure on the named not-found page.
/// Without a configured backend there is no handshake to start, so the
/// caller goes back to sign-in.
///
/// # Route
///
/// `GET /auth/google`
pub async fn login(State(state): State<AppState>) -> Redirect {
    let base_url = &state.config().base_url;
    let success_url = format!("{base_url}/");
    let failure_url = format!("{base_url}/404");

    match state
        .services()
        .account()
        .oauth_login_url(&success_url, &failure_url)
    {
        Some(url) => Redirect::to(&url),
        None => Redirect::to("/sign-in"),
    }
}

/// Terminate the current session and return to sign-in.
///
/// Always redirects; a failed termination is logged by the auth service and
/// never strands the caller.
///
/// # Route
///
/// `POST /logout`
pub async fn logout(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> Redirect {
    auth::logout_user(state.services(), token.as_deref()).await;
    Redirect::to("/sign-in")
}
