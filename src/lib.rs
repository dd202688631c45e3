//! tiergate — tiered content access behind role-based bearer tokens.
//!
//! Credentials are verified against an immutable startup-loaded user set,
//! successful logins mint short-lived signed tokens, and every content
//! request is evaluated against the resource's access tier: no proof of
//! identity yields 401, proven identity with the wrong role yields 403.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod state;
pub mod store;
