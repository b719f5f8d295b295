//! Backend service handles and the operations built on top of them.
//!
//! # Architecture
//!
//! The two capabilities consumed from the backend-as-a-service, the
//! account/session service and the user profile store, are expressed as
//! traits. One concrete [`crate::appwrite::AppwriteClient`] implements both;
//! [`UnavailableBackend`] is the null object installed when the backend is
//! not configured, so call sites never branch on the environment.
//!
//! Handles are bundled into [`Services`], constructed once at process start
//! and carried in the application state. Tests substitute fakes through
//! [`Services::custom`].

pub mod auth;
pub mod people;
pub mod users;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use wayfarer_core::{AccountId, AuthSession, Identity, NewUserProfile, Page, UserProfile};

use crate::appwrite::AppwriteClient;
use crate::config::AppwriteConfig;
use people::PeopleClient;

/// Errors surfaced by the backend service handles.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend was not configured for this process. Consumers translate
    /// this to their documented sentinel without logging it as an error.
    #[error("backend services unavailable")]
    Unavailable,

    /// No active session for the caller.
    #[error("not authenticated")]
    Unauthenticated,

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the call.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

/// Account and session operations owned by the auth backend.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// The identity behind the given session token.
    async fn current_identity(&self, token: Option<&str>) -> Result<Identity, BackendError>;

    /// The "current" session for the given token.
    async fn current_session(&self, token: Option<&str>) -> Result<AuthSession, BackendError>;

    /// Terminate the "current" session.
    async fn delete_current_session(&self, token: Option<&str>) -> Result<(), BackendError>;

    /// URL starting the provider OAuth redirect handshake, or `None` when the
    /// service cannot initiate one.
    fn oauth_login_url(&self, success_url: &str, failure_url: &str) -> Option<String>;
}

/// Read and create operations on the user profile collection.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// All profiles whose `accountId` equals the given id, in store order.
    /// `fields` optionally projects the returned attributes; `None` returns
    /// full documents.
    async fn find_by_account(
        &self,
        account_id: &AccountId,
        fields: Option<&[&str]>,
    ) -> Result<Page<UserProfile>, BackendError>;

    /// One window of the profile collection plus the total count.
    async fn list(&self, limit: u64, offset: u64) -> Result<Page<UserProfile>, BackendError>;

    /// Create a new profile document. The returned `Result` is authoritative;
    /// no post-hoc validation of the created document is performed.
    async fn create(&self, profile: NewUserProfile) -> Result<UserProfile, BackendError>;
}

/// Null-object backend installed when no backend is configured.
///
/// Every operation reports [`BackendError::Unavailable`]; consumers map that
/// to "not authenticated" or an empty result, never to a logged error.
pub struct UnavailableBackend;

#[async_trait]
impl AccountService for UnavailableBackend {
    async fn current_identity(&self, _token: Option<&str>) -> Result<Identity, BackendError> {
        Err(BackendError::Unavailable)
    }

    async fn current_session(&self, _token: Option<&str>) -> Result<AuthSession, BackendError> {
        Err(BackendError::Unavailable)
    }

    async fn delete_current_session(&self, _token: Option<&str>) -> Result<(), BackendError> {
        Err(BackendError::Unavailable)
    }

    fn oauth_login_url(&self, _success_url: &str, _failure_url: &str) -> Option<String> {
        None
    }
}

#[async_trait]
impl ProfileStore for UnavailableBackend {
    async fn find_by_account(
        &self,
        _account_id: &AccountId,
        _fields: Option<&[&str]>,
    ) -> Result<Page<UserProfile>, BackendError> {
        Err(BackendError::Unavailable)
    }

    async fn list(&self, _limit: u64, _offset: u64) -> Result<Page<UserProfile>, BackendError> {
        Err(BackendError::Unavailable)
    }

    async fn create(&self, _profile: NewUserProfile) -> Result<UserProfile, BackendError> {
        Err(BackendError::Unavailable)
    }
}

/// Service handles injected into every backend-dependent operation.
///
/// Cheaply cloneable; built once at process start.
#[derive(Clone)]
pub struct Services {
    account: Arc<dyn AccountService>,
    profiles: Arc<dyn ProfileStore>,
    people: PeopleClient,
}

impl Services {
    /// Handles backed by the Appwrite REST API.
    #[must_use]
    pub fn appwrite(config: &AppwriteConfig) -> Self {
        let client = AppwriteClient::new(config);
        Self {
            account: Arc::new(client.clone()),
            profiles: Arc::new(client),
            people: PeopleClient::new(),
        }
    }

    /// Null-object handles for a process without a configured backend.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            account: Arc::new(UnavailableBackend),
            profiles: Arc::new(UnavailableBackend),
            people: PeopleClient::new(),
        }
    }

    /// Assemble handles explicitly. Used by tests to substitute fakes.
    #[must_use]
    pub fn custom(
        account: Arc<dyn AccountService>,
        profiles: Arc<dyn ProfileStore>,
        people: PeopleClient,
    ) -> Self {
        Self {
            account,
            profiles,
            people,
        }
    }

    /// The account/session service handle.
    #[must_use]
    pub fn account(&self) -> &dyn AccountService {
        self.account.as_ref()
    }

    /// The user profile store handle.
    #[must_use]
    pub fn profiles(&self) -> &dyn ProfileStore {
        self.profiles.as_ref()
    }

    /// The provider profile-photo client.
    #[must_use]
    pub const fn people(&self) -> &PeopleClient {
        &self.people
    }
}
