//! Provider capability trait.

use crate::errors::Result;
use sso_model::{AuthService, Config, SsoSettings, User};

/// Capability set shared by every identity provider.
///
/// The login pipeline resolves a provider from the [`ProviderRegistry`]
/// and drives it without knowing which concrete provider it holds.
///
/// [`ProviderRegistry`]: crate::registry::ProviderRegistry
pub trait OAuthProvider: Send + Sync {
    /// Build a platform user from a fetched userinfo document.
    ///
    /// `token_user` is a user already derived from an ID token, for
    /// providers that can supply one.
    fn get_user_from_json(
        &self,
        data: &[u8],
        token_user: Option<&User>,
        settings: Option<&SsoSettings>,
    ) -> Result<User>;

    /// Select this provider's settings section from the platform config
    fn get_sso_settings<'a>(
        &self,
        config: &'a Config,
        service: AuthService,
    ) -> Result<&'a SsoSettings>;

    /// Build a platform user from an ID token, if the provider supports it
    fn get_user_from_id_token(&self, id_token: &str) -> Result<Option<User>>;

    /// Whether a stored user and a freshly mapped user are the same account
    fn is_same_user(&self, db_user: &User, oauth_user: &User) -> bool;
}
