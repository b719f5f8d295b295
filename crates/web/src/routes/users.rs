//! User directory API handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use wayfarer_core::{AccountId, UserProfile};

use crate::error::{AppError, Result};
use crate::services::users::{self, UserPage};
use crate::state::AppState;

const fn default_limit() -> u64 {
    10
}

/// Pagination window for the user listing.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

/// One window of the user directory.
///
/// # Route
///
/// `GET /api/users?limit=10&offset=0`
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<UserPage> {
    Json(users::get_all_users(state.services(), query.limit, query.offset).await)
}

/// Point lookup by account id.
///
/// # Route
///
/// `GET /api/users/{account_id}`
pub async fn show(
    State(state): State<AppState>,
    Path(account_id): Path<AccountId>,
) -> Result<Json<UserProfile>> {
    users::get_existing_user(state.services(), &account_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("no user with account id {account_id}")))
}
