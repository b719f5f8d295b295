//! Wayfarer Core - Shared types library.
//!
//! This crate provides the domain types shared across Wayfarer components:
//! - `web` - The travel-planning web layer and its backend integration
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Document
//! shapes mirror the backend-as-a-service wire format (`$id` system field,
//! camelCase attributes) so the same types serve as both domain objects and
//! payloads handed to the rendering layer.
//!
//! # Modules
//!
//! - [`types`] - Identities, user profiles, sessions, pages, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
