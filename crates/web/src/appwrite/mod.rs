//! Appwrite REST API client.
//!
//! # Architecture
//!
//! - One reqwest-based client implements both backend service traits:
//!   [`crate::services::AccountService`] (account, sessions, OAuth redirect)
//!   and [`crate::services::ProfileStore`] (user profile documents).
//! - Account calls authenticate with the caller's session token
//!   (`X-Appwrite-Session`); document calls use the server API key
//!   (`X-Appwrite-Key`). Every call carries `X-Appwrite-Project`.
//! - Document listings accept [`query::Query`] primitives serialized as JSON
//!   strings in repeated `queries[]` parameters.
//!
//! # Example
//!
//! ```rust,ignore
//! use wayfarer_web::appwrite::AppwriteClient;
//!
//! let client = AppwriteClient::new(&config);
//!
//! // Resolve the caller's identity
//! let identity = client.current_identity(Some(session_token)).await?;
//!
//! // Look up their profile
//! let page = client.find_by_account(&identity.account_id, None).await?;
//! ```

mod client;
pub mod query;

pub use client::AppwriteClient;
pub use query::Query;
