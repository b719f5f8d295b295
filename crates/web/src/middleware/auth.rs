//! Session token extraction.
//!
//! The auth backend owns the session; this layer only reads the ambient
//! token from the request. The `X-Appwrite-Session` header takes precedence
//! (API callers), falling back to the project-scoped cookie the backend sets
//! during the OAuth redirect flow.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};

use crate::state::AppState;

/// Header carrying an explicit session token.
const SESSION_HEADER: &str = "x-appwrite-session";

/// Extractor for the caller's backend session token, if any.
///
/// Never rejects: an absent token is the "not authenticated" case and every
/// consumer has a documented sentinel for it.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(SessionToken(token): SessionToken) -> impl IntoResponse {
///     match token {
///         Some(token) => format!("session: {token}"),
///         None => "signed out".to_string(),
///     }
/// }
/// ```
pub struct SessionToken(pub Option<String>);

impl FromRequestParts<AppState> for SessionToken {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(value) = parts.headers.get(SESSION_HEADER)
            && let Ok(token) = value.to_str()
            && !token.is_empty()
        {
            return Ok(Self(Some(token.to_string())));
        }

        let token = state
            .config()
            .appwrite
            .as_ref()
            .and_then(|appwrite| cookie_value(&parts.headers, &appwrite.session_cookie_name()));

        Ok(Self(token))
    }
}

/// Find a cookie by name across all `Cookie` headers.
fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            (key == name && !value.is_empty()).then(|| value.to_string())
        })
        .next()
}
