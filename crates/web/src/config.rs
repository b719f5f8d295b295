//! Web layer configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `WAYFARER_HOST` - Bind address (default: 127.0.0.1)
//! - `WAYFARER_PORT` - Listen port (default: 3000)
//! - `WAYFARER_BASE_URL` - Public URL for the app (default: derived from host/port)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `APPWRITE_ENDPOINT` - Appwrite API endpoint (e.g. <https://cloud.appwrite.io/v1>).
//!   When absent the app starts in degraded mode: every backend-dependent
//!   operation yields its documented "unavailable" sentinel.
//!
//! ## Required when `APPWRITE_ENDPOINT` is set
//! - `APPWRITE_PROJECT_ID` - Appwrite project id
//! - `APPWRITE_API_KEY` - Server API key used for document operations
//! - `APPWRITE_DATABASE_ID` - Database holding the app collections
//! - `APPWRITE_USERS_COLLECTION_ID` - User profile collection
//! - `APPWRITE_TRIPS_COLLECTION_ID` - Trip collection (configured for the app;
//!   no trip operations live in this layer)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Wayfarer application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the app, without a trailing slash
    pub base_url: String,
    /// Appwrite backend configuration; `None` runs the app in degraded mode
    pub appwrite: Option<AppwriteConfig>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Appwrite backend configuration.
#[derive(Debug, Clone)]
pub struct AppwriteConfig {
    /// API endpoint, e.g. `https://cloud.appwrite.io/v1`
    pub endpoint: String,
    /// Project id sent with every request
    pub project_id: String,
    /// Server API key used for document-store operations
    pub api_key: SecretString,
    /// Database holding the app collections
    pub database_id: String,
    /// Collection holding user profile documents
    pub users_collection_id: String,
    /// Collection holding trip documents (unused by this layer)
    pub trips_collection_id: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid, or if the
    /// Appwrite endpoint is set without the rest of its variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("WAYFARER_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("WAYFARER_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("WAYFARER_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("WAYFARER_PORT".to_string(), e.to_string()))?;

        let base_url = match get_optional_env("WAYFARER_BASE_URL") {
            Some(value) => validate_base_url("WAYFARER_BASE_URL", value)?,
            None => format!("http://{host}:{port}"),
        };

        let appwrite = AppwriteConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            base_url,
            appwrite,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl AppwriteConfig {
    /// Load the Appwrite block, treating an absent endpoint as "backend not
    /// configured" rather than an error.
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let Some(endpoint) = get_optional_env("APPWRITE_ENDPOINT") else {
            return Ok(None);
        };
        let endpoint = validate_base_url("APPWRITE_ENDPOINT", endpoint)?;

        Ok(Some(Self {
            endpoint,
            project_id: get_required_env("APPWRITE_PROJECT_ID")?,
            api_key: SecretString::from(get_required_env("APPWRITE_API_KEY")?),
            database_id: get_required_env("APPWRITE_DATABASE_ID")?,
            users_collection_id: get_required_env("APPWRITE_USERS_COLLECTION_ID")?,
            trips_collection_id: get_required_env("APPWRITE_TRIPS_COLLECTION_ID")?,
        }))
    }

    /// Name of the session cookie the auth backend sets for this project.
    #[must_use]
    pub fn session_cookie_name(&self) -> String {
        format!("a_session_{}", self.project_id.to_lowercase())
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a URL-valued variable and strip any trailing slash.
fn validate_base_url(key: &str, value: String) -> Result<String, ConfigError> {
    Url::parse(&value).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    Ok(value.trim_end_matches('/').to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn appwrite_config() -> AppwriteConfig {
        AppwriteConfig {
            endpoint: "https://cloud.appwrite.io/v1".to_string(),
            project_id: "Wayfarer01".to_string(),
            api_key: SecretString::from("key"),
            database_id: "db".to_string(),
            users_collection_id: "users".to_string(),
            trips_collection_id: "trips".to_string(),
        }
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            appwrite: None,
            sentry_dsn: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_session_cookie_name_lowercases_project() {
        assert_eq!(
            appwrite_config().session_cookie_name(),
            "a_session_wayfarer01"
        );
    }

    #[test]
    fn test_validate_base_url_strips_trailing_slash() {
        let url = validate_base_url("TEST", "http://localhost:3000/".to_string()).unwrap();
        assert_eq!(url, "http://localhost:3000");
    }

    #[test]
    fn test_validate_base_url_rejects_garbage() {
        let result = validate_base_url("TEST", "not a url".to_string());
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_api_key_debug_redacted() {
        let debug_output = format!("{:?}", appwrite_config());
        assert!(!debug_output.contains("key\""));
        assert!(debug_output.contains("REDACTED"));
    }
}
