//! SSO provider configuration.

use crate::errors::{ModelError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_SCOPE: &str = "profile openid email";
const DEFAULT_BUTTON_COLOR: &str = "#145DBF";

/// Settings block for a single SSO provider.
///
/// Every field is optional so a partially written configuration document
/// can be loaded and completed by [`SsoSettings::set_defaults`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SsoSettings {
    /// Whether the provider is offered at login
    pub enable: Option<bool>,
    /// Client secret
    pub secret: Option<String>,
    /// Client ID
    pub id: Option<String>,
    /// Scopes to request
    pub scope: Option<String>,
    /// Authorization endpoint
    pub auth_endpoint: Option<String>,
    /// Token exchange endpoint
    pub token_endpoint: Option<String>,
    /// User info endpoint
    #[serde(rename = "UserAPIEndpoint")]
    pub user_api_endpoint: Option<String>,
    /// OIDC discovery document URL
    pub discovery_endpoint: Option<String>,
    /// Login button label
    pub button_text: Option<String>,
    /// Login button color
    pub button_color: Option<String>,
    /// Prefer the `preferred_username` claim over `nickname` when deriving usernames
    pub use_preferred_username: Option<bool>,
}

impl SsoSettings {
    /// Whether `preferred_username` should win over `nickname`; absent means no
    pub fn use_preferred_username(&self) -> bool {
        self.use_preferred_username.unwrap_or(false)
    }

    /// Fill every absent field with its default
    pub fn set_defaults(&mut self) {
        fn empty(field: &mut Option<String>) {
            field.get_or_insert_with(String::new);
        }

        self.enable.get_or_insert(false);
        self.use_preferred_username.get_or_insert(false);
        self.scope.get_or_insert_with(|| DEFAULT_SCOPE.to_string());
        self.button_color
            .get_or_insert_with(|| DEFAULT_BUTTON_COLOR.to_string());

        empty(&mut self.secret);
        empty(&mut self.id);
        empty(&mut self.auth_endpoint);
        empty(&mut self.token_endpoint);
        empty(&mut self.user_api_endpoint);
        empty(&mut self.discovery_endpoint);
        empty(&mut self.button_text);
    }
}

/// Platform configuration sections consumed by SSO providers
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// GitLab settings
    #[serde(rename = "GitLabSettings", default)]
    pub gitlab_settings: SsoSettings,
    /// Google settings
    #[serde(rename = "GoogleSettings", default)]
    pub google_settings: SsoSettings,
    /// Office 365 settings
    #[serde(rename = "Office365Settings", default)]
    pub office365_settings: SsoSettings,
    /// Generic OpenID Connect settings
    #[serde(rename = "OpenIdSettings", default)]
    pub openid_settings: SsoSettings,
}

impl Config {
    /// Load configuration from a JSON file and apply defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read(path.as_ref())?;
        let mut config: Config = serde_json::from_slice(&raw)?;
        config.set_defaults();
        Ok(config)
    }

    /// Apply defaults to every provider section
    pub fn set_defaults(&mut self) {
        self.gitlab_settings.set_defaults();
        self.google_settings.set_defaults();
        self.office365_settings.set_defaults();
        self.openid_settings.set_defaults();
    }

    /// Override OpenID settings from `SSO_OPENID_*` environment variables
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|var| std::env::var(var).ok())
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        let settings = &mut self.openid_settings;

        if let Some(value) = lookup("SSO_OPENID_ENABLE") {
            settings.enable = Some(parse_bool("SSO_OPENID_ENABLE", &value)?);
        }
        if let Some(value) = lookup("SSO_OPENID_USE_PREFERRED_USERNAME") {
            settings.use_preferred_username =
                Some(parse_bool("SSO_OPENID_USE_PREFERRED_USERNAME", &value)?);
        }
        if let Some(value) = lookup("SSO_OPENID_ID") {
            settings.id = Some(value);
        }
        if let Some(value) = lookup("SSO_OPENID_DISCOVERY_ENDPOINT") {
            settings.discovery_endpoint = Some(value);
        }

        Ok(())
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool> {
    value.trim().parse().map_err(|_| ModelError::InvalidEnv {
        var: var.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_use_preferred_username_absent_is_false() {
        assert!(!SsoSettings::default().use_preferred_username());

        let settings = SsoSettings {
            use_preferred_username: Some(true),
            ..Default::default()
        };
        assert!(settings.use_preferred_username());
    }

    #[test]
    fn test_set_defaults_keeps_explicit_values() {
        let mut settings = SsoSettings {
            scope: Some("openid".to_string()),
            use_preferred_username: Some(true),
            ..Default::default()
        };
        settings.set_defaults();

        assert_eq!(settings.scope.as_deref(), Some("openid"));
        assert_eq!(settings.use_preferred_username, Some(true));
        assert_eq!(settings.enable, Some(false));
        assert_eq!(settings.button_color.as_deref(), Some(DEFAULT_BUTTON_COLOR));
        assert_eq!(settings.discovery_endpoint.as_deref(), Some(""));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "OpenIdSettings": {{
                    "Enable": true,
                    "Id": "client",
                    "UserAPIEndpoint": "https://idp.example.com/userinfo",
                    "UsePreferredUsername": true
                }},
                "SqlSettings": {{ "DriverName": "postgres" }}
            }}"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();

        assert_eq!(config.openid_settings.enable, Some(true));
        assert_eq!(config.openid_settings.id.as_deref(), Some("client"));
        assert_eq!(
            config.openid_settings.user_api_endpoint.as_deref(),
            Some("https://idp.example.com/userinfo")
        );
        assert!(config.openid_settings.use_preferred_username());
        assert_eq!(config.openid_settings.scope.as_deref(), Some(DEFAULT_SCOPE));
        assert_eq!(config.gitlab_settings.enable, Some(false));
    }

    #[test]
    fn test_from_file_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ \"OpenIdSettings\": ").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ModelError::Parse(_)));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ModelError::Io(_)));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("SSO_OPENID_USE_PREFERRED_USERNAME", "true"),
            ("SSO_OPENID_ID", "from-env"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_overrides(|var| vars.get(var).map(|v| v.to_string()))
            .unwrap();

        assert!(config.openid_settings.use_preferred_username());
        assert_eq!(config.openid_settings.id.as_deref(), Some("from-env"));
        assert_eq!(config.openid_settings.enable, None);
    }

    #[test]
    fn test_env_override_rejects_non_boolean() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(|var| (var == "SSO_OPENID_ENABLE").then(|| "yes".to_string()))
            .unwrap_err();

        assert!(matches!(err, ModelError::InvalidEnv { var, .. } if var == "SSO_OPENID_ENABLE"));
    }
}
