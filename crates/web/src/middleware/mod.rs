//! Request extractors for the web layer.

pub mod auth;

pub use auth::SessionToken;
