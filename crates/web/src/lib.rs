//! Wayfarer web layer library.
//!
//! This crate provides the web layer as a library, allowing it to be tested
//! and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod appwrite;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
