//! Read-only user directory queries.

use serde::Serialize;

use wayfarer_core::{AccountId, UserProfile};

use super::{BackendError, Services};

/// One page of the user directory.
#[derive(Debug, Serialize)]
pub struct UserPage {
    /// Users in this window, in store order.
    pub users: Vec<UserProfile>,
    /// Total users across all pages, independent of the window.
    pub total: u64,
}

impl UserPage {
    const fn empty() -> Self {
        Self {
            users: Vec::new(),
            total: 0,
        }
    }
}

/// Point lookup by account id.
///
/// Returns the first matching profile in store order, or `None` when there
/// is no match, the backend is unavailable, or the call fails (failures are
/// logged).
pub async fn get_existing_user(services: &Services, account_id: &AccountId) -> Option<UserProfile> {
    match services.profiles().find_by_account(account_id, None).await {
        Ok(page) => page.into_first(),
        Err(BackendError::Unavailable) => None,
        Err(error) => {
            tracing::error!(%error, account_id = %account_id, "failed to look up user profile");
            None
        }
    }
}

/// One fixed-size window of the user directory plus the total count.
///
/// Offset-based pagination: stable only while the collection is not
/// concurrently mutated. On unavailability or failure returns the empty page
/// with zero total rather than propagating the error.
pub async fn get_all_users(services: &Services, limit: u64, offset: u64) -> UserPage {
    match services.profiles().list(limit, offset).await {
        Ok(page) => UserPage {
            users: page.documents,
            total: page.total,
        },
        Err(BackendError::Unavailable) => UserPage::empty(),
        Err(error) => {
            tracing::error!(%error, "failed to list users");
            UserPage::empty()
        }
    }
}
