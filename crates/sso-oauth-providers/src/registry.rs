//! Registry of identity providers keyed by auth service.

use crate::errors::{ProviderError, Result};
use crate::openid;
use crate::traits::OAuthProvider;
use sso_model::AuthService;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Providers available to the login pipeline.
///
/// Built once during bootstrap and then shared read-only.
#[derive(Default, Clone)]
pub struct ProviderRegistry {
    providers: BTreeMap<AuthService, Arc<dyn OAuthProvider>>,
}

impl ProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every provider this crate ships
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        openid::register(&mut registry);
        registry
    }

    /// Register a provider, replacing any previous one for the service
    pub fn register(&mut self, service: AuthService, provider: Arc<dyn OAuthProvider>) {
        if self.providers.insert(service, provider).is_some() {
            warn!(%service, "Replaced previously registered OAuth provider");
        } else {
            info!(%service, "Registered OAuth provider");
        }
    }

    /// Look up the provider for a service
    pub fn get(&self, service: AuthService) -> Option<Arc<dyn OAuthProvider>> {
        self.providers.get(&service).cloned()
    }

    /// Look up the provider for a service, failing if none is registered
    pub fn require(&self, service: AuthService) -> Result<Arc<dyn OAuthProvider>> {
        self.get(service).ok_or(ProviderError::UnknownService(service))
    }

    /// Registered services in tag order
    pub fn services(&self) -> Vec<AuthService> {
        self.providers.keys().copied().collect()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("services", &self.services())
            .finish()
    }
}
