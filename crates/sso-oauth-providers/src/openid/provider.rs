//! OpenID Connect provider implementation.

use crate::errors::Result;
use crate::openid::types::OpenIdUserInfo;
use crate::traits::OAuthProvider;
use sso_model::{
    AuthService, Config, DefaultUsernameSanitizer, SsoSettings, User, UsernameSanitizer,
};
use std::sync::Arc;
use tracing::debug;

/// Generic OpenID Connect provider.
///
/// Users are derived from the userinfo endpoint; ID tokens are not used
/// as an identity source.
#[derive(Clone)]
pub struct OpenIdProvider {
    sanitizer: Arc<dyn UsernameSanitizer>,
}

impl OpenIdProvider {
    /// Create a provider applying the platform username rules
    pub fn new() -> Self {
        Self::with_sanitizer(Arc::new(DefaultUsernameSanitizer))
    }

    /// Create a provider with a custom username sanitizer
    pub fn with_sanitizer(sanitizer: Arc<dyn UsernameSanitizer>) -> Self {
        Self { sanitizer }
    }

    /// Map validated userinfo claims to a platform user
    pub fn user_from_userinfo(
        &self,
        user_info: &OpenIdUserInfo,
        settings: Option<&SsoSettings>,
    ) -> User {
        let username = self.sanitizer.clean(username_candidate(user_info, settings));
        let (first_name, last_name) = names(user_info);

        debug!(sub = %user_info.sub, "Mapped OpenID userinfo to user");

        User {
            username,
            first_name,
            last_name,
            email: user_info.email.to_lowercase(),
            auth_data: Some(user_info.auth_data().to_string()),
            auth_service: AuthService::OpenId.as_str().to_string(),
        }
    }
}

impl Default for OpenIdProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for OpenIdProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenIdProvider").finish_non_exhaustive()
    }
}

impl OAuthProvider for OpenIdProvider {
    fn get_user_from_json(
        &self,
        data: &[u8],
        _token_user: Option<&User>,
        settings: Option<&SsoSettings>,
    ) -> Result<User> {
        let user_info = OpenIdUserInfo::from_json(data)?;
        user_info.validate()?;

        Ok(self.user_from_userinfo(&user_info, settings))
    }

    fn get_sso_settings<'a>(
        &self,
        config: &'a Config,
        _service: AuthService,
    ) -> Result<&'a SsoSettings> {
        Ok(&config.openid_settings)
    }

    fn get_user_from_id_token(&self, _id_token: &str) -> Result<Option<User>> {
        // Identity comes from the userinfo endpoint only
        Ok(None)
    }

    fn is_same_user(&self, db_user: &User, oauth_user: &User) -> bool {
        db_user.auth_data == oauth_user.auth_data
    }
}

/// Pick the raw username in order of preference
fn username_candidate<'a>(
    user_info: &'a OpenIdUserInfo,
    settings: Option<&SsoSettings>,
) -> &'a str {
    let prefer_preferred = settings.is_some_and(SsoSettings::use_preferred_username);

    if prefer_preferred && !user_info.preferred_username.is_empty() {
        local_part(&user_info.preferred_username)
    } else if !user_info.nickname.is_empty() {
        &user_info.nickname
    } else if !user_info.preferred_username.is_empty() {
        local_part(&user_info.preferred_username)
    } else {
        local_part(&user_info.email)
    }
}

/// Text before the first `@`, or the whole string
fn local_part(value: &str) -> &str {
    value.split_once('@').map_or(value, |(local, _)| local)
}

/// First and last name, falling back to splitting the full name only when
/// neither given nor family name is present
fn names(user_info: &OpenIdUserInfo) -> (String, String) {
    let first_name = user_info.given_name.clone();
    let last_name = user_info.family_name.clone();

    if !first_name.is_empty() || !last_name.is_empty() || user_info.name.is_empty() {
        return (first_name, last_name);
    }

    match user_info.name.split_once(' ') {
        Some((first, rest)) => (first.to_string(), rest.to_string()),
        None => (user_info.name.clone(), String::new()),
    }
}
