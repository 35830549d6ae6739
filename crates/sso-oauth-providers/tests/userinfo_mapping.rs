//! End-to-end mapping of userinfo documents through the provider registry.

use sso_model::{AuthService, Config, SsoSettings, User};
use sso_oauth_providers::{ProviderError, ProviderRegistry, ValidationError};
use std::io::Write;

fn map(json: &str, settings: Option<&SsoSettings>) -> Result<User, ProviderError> {
    let registry = ProviderRegistry::with_defaults();
    let provider = registry.require(AuthService::OpenId)?;
    provider.get_user_from_json(json.as_bytes(), None, settings)
}

#[test]
fn test_full_userinfo_maps_to_user() {
    let user = map(
        r#"{
            "sub": "00u1a2b3c4",
            "email": "Ada.Lovelace@Example.org",
            "email_verified": false,
            "name": "Augusta Ada King",
            "given_name": "Ada",
            "family_name": "Lovelace",
            "nickname": "ada",
            "preferred_username": "countess@example.org",
            "locale": "en-GB"
        }"#,
        None,
    )
    .unwrap();

    assert_eq!(
        user,
        User {
            username: "ada".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada.lovelace@example.org".to_string(),
            auth_data: Some("00u1a2b3c4".to_string()),
            auth_service: "openid".to_string(),
        }
    );
}

#[test]
fn test_minimal_userinfo_falls_back_to_email() {
    let user = map(r#"{"sub": "s", "email": "Grace.Hopper@navy.mil"}"#, None).unwrap();

    assert_eq!(user.username, "grace.hopper");
    assert_eq!(user.email, "grace.hopper@navy.mil");
    assert_eq!(user.first_name, "");
    assert_eq!(user.last_name, "");
}

#[test]
fn test_settings_from_config_file_drive_username() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"OpenIdSettings": {{"UsePreferredUsername": true}}}}"#
    )
    .unwrap();
    let config = Config::from_file(file.path()).unwrap();

    let registry = ProviderRegistry::with_defaults();
    let provider = registry.require(AuthService::OpenId).unwrap();
    let settings = provider.get_sso_settings(&config, AuthService::OpenId).unwrap();

    let json = r#"{
        "sub": "1",
        "email": "e@x.com",
        "preferred_username": "alice@x.com",
        "nickname": "bob"
    }"#;
    let user = map(json, Some(settings)).unwrap();
    assert_eq!(user.username, "alice");

    let defaults = Config::default();
    let settings = provider.get_sso_settings(&defaults, AuthService::OpenId).unwrap();
    let user = map(json, Some(settings)).unwrap();
    assert_eq!(user.username, "bob");
}

#[test]
fn test_full_name_fallback() {
    let json = r#"{
        "sub": "1",
        "email": "e@x.com",
        "given_name": "",
        "family_name": "",
        "name": "John Middle Paul Doe"
    }"#;
    let user = map(json, None).unwrap();

    assert_eq!(user.first_name, "John");
    assert_eq!(user.last_name, "Middle Paul Doe");
}

#[test]
fn test_missing_subject() {
    let err = map(r#"{"sub": "", "email": "e@x.com", "name": "X Y"}"#, None).unwrap_err();

    assert!(matches!(
        err,
        ProviderError::Validation(ValidationError::MissingSubject)
    ));
    assert_eq!(err.to_string(), "missing subject");
}

#[test]
fn test_missing_email() {
    let err = map(r#"{"sub": "1", "nickname": "n"}"#, None).unwrap_err();

    assert!(matches!(
        err,
        ProviderError::Validation(ValidationError::MissingEmail)
    ));
    assert_eq!(err.to_string(), "missing email");
}

#[test]
fn test_truncated_json_is_decode_error() {
    let err = map(r#"{"sub": "1", "email": "e@x"#, None).unwrap_err();
    assert!(matches!(err, ProviderError::Decode(_)));
}

#[test]
fn test_decode_error_takes_precedence_over_validation() {
    // Type error in an optional field with required claims missing
    let err = map(r#"{"email_verified": "true"}"#, None).unwrap_err();
    assert!(matches!(err, ProviderError::Decode(_)));
}

#[test]
fn test_repeated_claim_keeps_last_value() {
    let user = map(r#"{"sub": "a", "sub": "b", "email": "e@x.com"}"#, None).unwrap();

    assert_eq!(user.auth_data.as_deref(), Some("b"));
}

#[test]
fn test_null_document_is_decode_error() {
    let err = map("null", None).unwrap_err();
    assert!(matches!(err, ProviderError::Decode(_)));
}

#[test]
fn test_returning_user_matches_on_subject() {
    let registry = ProviderRegistry::with_defaults();
    let provider = registry.require(AuthService::OpenId).unwrap();

    let first_login = map(r#"{"sub": "stable-id", "email": "old@x.com"}"#, None).unwrap();
    let second_login = map(
        r#"{"sub": "stable-id", "email": "new@x.com", "nickname": "renamed"}"#,
        None,
    )
    .unwrap();
    let other = map(r#"{"sub": "other-id", "email": "old@x.com"}"#, None).unwrap();

    assert!(provider.is_same_user(&first_login, &second_login));
    assert!(!provider.is_same_user(&first_login, &other));
}
