//! Internal user record and auth service tags.

use crate::errors::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identity provider a user authenticates through
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum AuthService {
    /// Local email + password
    Email,
    /// GitLab OAuth
    GitLab,
    /// Google OAuth
    Google,
    /// Microsoft Office 365 OAuth
    Office365,
    /// Generic OpenID Connect
    OpenId,
    /// SAML
    Saml,
    /// LDAP
    Ldap,
}

impl AuthService {
    /// Get service tag as string
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthService::Email => "email",
            AuthService::GitLab => "gitlab",
            AuthService::Google => "google",
            AuthService::Office365 => "office365",
            AuthService::OpenId => "openid",
            AuthService::Saml => "saml",
            AuthService::Ldap => "ldap",
        }
    }
}

impl fmt::Display for AuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthService {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(AuthService::Email),
            "gitlab" => Ok(AuthService::GitLab),
            "google" => Ok(AuthService::Google),
            "office365" => Ok(AuthService::Office365),
            "openid" => Ok(AuthService::OpenId),
            "saml" => Ok(AuthService::Saml),
            "ldap" => Ok(AuthService::Ldap),
            other => Err(ModelError::UnknownAuthService(other.to_string())),
        }
    }
}

/// Platform user as produced by an identity provider.
///
/// Providers create a fresh value per login attempt; the provisioning
/// pipeline decides whether to persist it or merge it into a stored user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Sanitized username
    pub username: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Lower-cased email address
    pub email: String,
    /// Provider-issued identifier used to match returning users
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_data: Option<String>,
    /// Tag of the provider that produced this user
    pub auth_service: String,
}
