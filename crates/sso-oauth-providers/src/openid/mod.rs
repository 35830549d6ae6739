//! Generic OpenID Connect provider.
//!
//! This module provides:
//! - `OpenIdUserInfo` decoding and required-claim validation
//! - `OpenIdProvider`, mapping userinfo claims to a platform user
//! - `register`, the bootstrap hook adding the provider to a registry

pub mod provider;
pub mod types;

pub use provider::OpenIdProvider;
pub use types::OpenIdUserInfo;

use crate::registry::ProviderRegistry;
use sso_model::AuthService;
use std::sync::Arc;

/// Register the OpenID provider under [`AuthService::OpenId`].
///
/// Called by the host application's bootstrap sequence.
pub fn register(registry: &mut ProviderRegistry) {
    registry.register(AuthService::OpenId, Arc::new(OpenIdProvider::new()));
}
