//! Home page and the named not-found route.

use axum::http::StatusCode;

/// Home page loader. Also the success target of the OAuth handshake.
///
/// # Route
///
/// `GET /`
pub async fn home() -> &'static str {
    "Wayfarer"
}

/// Not-found page, the failure target of the OAuth handshake.
///
/// # Route
///
/// `GET /404`
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Page not found")
}
