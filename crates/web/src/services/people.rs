//! Google People API client for provider profile photos.
//!
//! Used exactly once per first sign-in: the session's provider access token
//! buys one `people/me` lookup, and the first photo URL (if any) becomes the
//! new profile's avatar.

use serde::Deserialize;
use thiserror::Error;

/// Google People API base URL.
const BASE_URL: &str = "https://people.googleapis.com";

/// Errors that can occur when fetching the provider profile photo.
#[derive(Debug, Error)]
pub enum PeopleError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

/// Google People API client.
#[derive(Clone)]
pub struct PeopleClient {
    client: reqwest::Client,
    base_url: String,
}

impl PeopleClient {
    /// Create a client against the production endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Create a client against a custom endpoint (mock servers in tests).
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the first profile photo URL for the token's owner.
    ///
    /// Returns `Ok(None)` when the photos list is empty or absent.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the API responds with a
    /// non-success status.
    pub async fn primary_photo_url(
        &self,
        access_token: &str,
    ) -> Result<Option<String>, PeopleError> {
        let url = format!("{}/v1/people/me?personFields=photos", self.base_url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PeopleError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let person: Person = response.json().await?;
        Ok(person.photos.into_iter().next().and_then(|photo| photo.url))
    }
}

impl Default for PeopleClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Person resource, reduced to the photos field.
#[derive(Debug, Deserialize)]
struct Person {
    #[serde(default)]
    photos: Vec<Photo>,
}

/// One entry of the photos list.
#[derive(Debug, Deserialize)]
struct Photo {
    url: Option<String>,
}
