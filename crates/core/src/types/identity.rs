//! The authenticated principal as reported by the auth backend.

use serde::{Deserialize, Serialize};

use crate::types::id::AccountId;

/// The identity behind the current session.
///
/// Owned by the backend-as-a-service auth subsystem and read-only to this
/// layer. The wire shape uses the backend's `$id` system field for the
/// stable account id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque stable account id.
    #[serde(rename = "$id")]
    pub account_id: AccountId,
    /// Email address registered with the auth provider.
    pub email: String,
    /// Display name from the auth provider.
    pub name: String,
}
