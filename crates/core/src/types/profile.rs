//! Persisted user profile documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::id::{AccountId, DocumentId};
use crate::types::status::UserStatus;

/// The application-level user record keyed by the identity's account id.
///
/// Created exactly once per identity on first successful sign-in; never
/// deleted or updated by this layer. The shape mirrors the stored document
/// (camelCase attributes plus the `$id` system field) so it can be returned
/// to the rendering layer unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Document id assigned by the store.
    #[serde(rename = "$id")]
    pub id: DocumentId,
    /// Foreign key to the identity; unique per profile.
    pub account_id: AccountId,
    /// Email captured from the identity at creation time.
    pub email: String,
    /// Display name captured from the identity at creation time.
    pub name: String,
    /// Avatar URL fetched from the OAuth provider, if any.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Set once when the profile is created.
    pub joined_at: DateTime<Utc>,
    /// Role managed externally; absent on newly created profiles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

/// Attributes for a profile document about to be created.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserProfile {
    /// Foreign key to the identity.
    pub account_id: AccountId,
    /// Email from the current identity.
    pub email: String,
    /// Display name from the current identity.
    pub name: String,
    /// Avatar URL, or `None` when the provider photo was unavailable.
    pub image_url: Option<String>,
    /// Creation timestamp, set once by this layer.
    pub joined_at: DateTime<Utc>,
}
