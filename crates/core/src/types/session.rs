//! The ephemeral auth session attached to a signed-in identity.

use serde::Deserialize;

/// A session as reported by the auth backend.
///
/// Not persisted by this layer; its only use is the provider access token
/// consumed once to fetch an avatar. The backend reports "no token" as an
/// empty string, which [`AuthSession::provider_access_token`] normalizes to
/// `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    /// Session id assigned by the auth backend.
    #[serde(rename = "$id")]
    pub id: String,
    /// OAuth provider that created the session (e.g. "google").
    #[serde(default)]
    pub provider: String,
    #[serde(default, rename = "providerAccessToken")]
    provider_access_token: String,
}

impl AuthSession {
    /// The OAuth provider access token, if the session carries one.
    #[must_use]
    pub fn provider_access_token(&self) -> Option<&str> {
        if self.provider_access_token.is_empty() {
            None
        } else {
            Some(&self.provider_access_token)
        }
    }

    /// Build a session value directly, for test fixtures.
    #[must_use]
    pub fn with_token(id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            provider: "google".to_string(),
            provider_access_token: token.into(),
        }
    }
}
