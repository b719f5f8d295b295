//! Core types for Wayfarer.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod identity;
pub mod page;
pub mod profile;
pub mod session;
pub mod status;

pub use id::*;
pub use identity::Identity;
pub use page::Page;
pub use profile::{NewUserProfile, UserProfile};
pub use session::AuthSession;
pub use status::UserStatus;
