//! Provider error types.

use sso_model::AuthService;
use thiserror::Error;

/// Provider errors
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Userinfo document is not valid JSON for the expected shape
    #[error("Failed to decode userinfo: {0}")]
    Decode(#[from] serde_json::Error),

    /// Userinfo document is missing a required claim
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No provider registered for the service
    #[error("No provider registered for service: {0}")]
    UnknownService(AuthService),
}

/// Required claim missing from a userinfo document
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// `sub` is empty or absent
    #[error("missing subject")]
    MissingSubject,

    /// `email` is empty or absent
    #[error("missing email")]
    MissingEmail,
}

/// Result type for provider operations
pub type Result<T> = std::result::Result<T, ProviderError>;
