//! OpenID Connect userinfo claims.

use crate::errors::{Result, ValidationError};
use serde::{Deserialize, Deserializer, Serialize};

/// Claims returned by an OIDC userinfo endpoint.
///
/// Standard claims: https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims
/// Absent and `null` claims decode as empty values; unknown claims are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpenIdUserInfo {
    /// Subject (provider's user ID)
    #[serde(default, deserialize_with = "null_as_default")]
    pub sub: String,
    /// Email address
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    /// Email verified flag (informational only)
    #[serde(default, deserialize_with = "null_as_default")]
    pub email_verified: bool,
    /// Full name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Preferred username, often email-shaped
    #[serde(default, deserialize_with = "null_as_default")]
    pub preferred_username: String,
    /// Given name
    #[serde(default, deserialize_with = "null_as_default")]
    pub given_name: String,
    /// Family name
    #[serde(default, deserialize_with = "null_as_default")]
    pub family_name: String,
    /// Nickname
    #[serde(default, deserialize_with = "null_as_default")]
    pub nickname: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl OpenIdUserInfo {
    /// Decode the first JSON value in `data`.
    ///
    /// Bytes following the object are not examined. A claim repeated
    /// within the object keeps its last value.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let mut deserializer = serde_json::Deserializer::from_slice(data);
        let document = serde_json::Value::deserialize(&mut deserializer)?;
        Ok(Self::deserialize(document)?)
    }

    /// Check the claims every login requires
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.sub.is_empty() {
            return Err(ValidationError::MissingSubject);
        }

        if self.email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }

        Ok(())
    }

    /// Identifier stored as the user's auth data
    pub fn auth_data(&self) -> &str {
        &self.sub
    }
}
