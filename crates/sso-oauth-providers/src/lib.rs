//! OAuth/OIDC provider adapters for the platform's SSO login.
//!
//! This crate provides:
//! - The `OAuthProvider` capability trait every identity provider implements
//! - A `ProviderRegistry` populated explicitly during application bootstrap
//! - Generic OpenID Connect support (userinfo decoding, validation, mapping)
//!
//! Token exchange, discovery, and ID token verification happen in the OAuth
//! client before a provider is consulted; providers only see the userinfo
//! document that client already fetched.

#![warn(missing_docs)]

pub mod errors;
pub mod openid;
pub mod registry;
pub mod traits;

// Re-exports
pub use errors::{ProviderError, Result, ValidationError};
pub use openid::{OpenIdProvider, OpenIdUserInfo};
pub use registry::ProviderRegistry;
pub use traits::OAuthProvider;
