//! Session accessor, logout, and first-sign-in profile sync.
//!
//! Functions here return typed outcomes or sentinels; the route layer owns
//! every redirect decision. Remote failures are logged and converted, never
//! re-raised; an unconfigured backend is translated silently.

use chrono::Utc;

use wayfarer_core::{NewUserProfile, UserProfile};

use super::{BackendError, Services};

/// Attributes projected when the session accessor looks up a profile.
/// `status` is not part of the projection; the admin guard fetches full
/// documents separately.
const SESSION_PROFILE_FIELDS: &[&str] = &["name", "email", "imageUrl", "joinedAt", "accountId"];

/// Result of resolving the caller's session to a user profile.
#[derive(Debug)]
pub enum SessionOutcome {
    /// An active session with a matching profile document.
    Authenticated(UserProfile),
    /// No usable session: backend unavailable, no token, or the backend
    /// rejected the session. Routes redirect to sign-in.
    Unauthenticated,
    /// The session is valid but no profile document matches the identity.
    /// Routes redirect to sign-in.
    ProfileMissing,
    /// A remote failure, already logged. Routes render the no-data state
    /// rather than redirecting.
    Failed,
}

/// Resolve the current session to its user profile.
///
/// The lookup filters on `accountId` with a field projection and takes the
/// first match; duplicate profiles are not an error here.
pub async fn get_user(services: &Services, token: Option<&str>) -> SessionOutcome {
    let identity = match services.account().current_identity(token).await {
        Ok(identity) => identity,
        Err(BackendError::Unavailable | BackendError::Unauthenticated) => {
            return SessionOutcome::Unauthenticated;
        }
        Err(error) => {
            tracing::error!(%error, "failed to fetch current identity");
            return SessionOutcome::Failed;
        }
    };

    match services
        .profiles()
        .find_by_account(&identity.account_id, Some(SESSION_PROFILE_FIELDS))
        .await
    {
        Ok(page) => page
            .into_first()
            .map_or(SessionOutcome::ProfileMissing, SessionOutcome::Authenticated),
        Err(BackendError::Unavailable) => SessionOutcome::Unauthenticated,
        Err(error) => {
            tracing::error!(%error, account_id = %identity.account_id, "failed to fetch user profile");
            SessionOutcome::Failed
        }
    }
}

/// Terminate the current session.
///
/// Always resolves; failures are logged and swallowed so logout can never
/// strand the caller.
pub async fn logout_user(services: &Services, token: Option<&str>) {
    match services.account().delete_current_session(token).await {
        Ok(()) | Err(BackendError::Unavailable | BackendError::Unauthenticated) => {}
        Err(error) => {
            tracing::error!(%error, "failed to terminate session");
        }
    }
}

/// Create a profile document for the identity behind the current session.
///
/// Fetches the provider avatar when the session carries an access token; a
/// failed photo fetch only costs the avatar, not the profile. The create
/// call's own result is authoritative. Returns `None` on any failure; never
/// raises to the caller.
///
/// Existence is not checked here: calling this twice for the same identity
/// creates two documents. The admin guard performs the lookup first.
pub async fn store_user_data(services: &Services, token: Option<&str>) -> Option<UserProfile> {
    let identity = match services.account().current_identity(token).await {
        Ok(identity) => identity,
        Err(BackendError::Unavailable) => return None,
        Err(error) => {
            tracing::error!(%error, "no identity available for profile sync");
            return None;
        }
    };

    let session = match services.account().current_session(token).await {
        Ok(session) => session,
        Err(BackendError::Unavailable) => return None,
        Err(error) => {
            tracing::error!(%error, "failed to fetch current session");
            return None;
        }
    };

    let image_url = match session.provider_access_token() {
        Some(access_token) => match services.people().primary_photo_url(access_token).await {
            Ok(url) => url,
            Err(error) => {
                tracing::error!(%error, "failed to fetch provider profile photo");
                None
            }
        },
        None => None,
    };

    let new_profile = NewUserProfile {
        account_id: identity.account_id.clone(),
        email: identity.email,
        name: identity.name,
        image_url,
        joined_at: Utc::now(),
    };

    match services.profiles().create(new_profile).await {
        Ok(profile) => Some(profile),
        Err(BackendError::Unavailable) => None,
        Err(error) => {
            tracing::error!(%error, account_id = %identity.account_id, "failed to create user profile");
            None
        }
    }
}
