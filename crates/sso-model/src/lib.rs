//! Shared platform model for SSO providers.
//!
//! This crate provides:
//! - The internal `User` record every provider produces
//! - Per-provider `SsoSettings` and the surrounding `Config`
//! - The `AuthService` tags identifying each identity provider
//! - Username sanitization applied to provider-derived usernames

#![warn(missing_docs)]

pub mod config;
pub mod errors;
pub mod user;
pub mod username;

// Re-exports
pub use config::{Config, SsoSettings};
pub use errors::{ModelError, Result};
pub use user::{AuthService, User};
pub use username::{DefaultUsernameSanitizer, UsernameSanitizer};
