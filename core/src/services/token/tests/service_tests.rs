//! Unit tests for the token service

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::{Duration, Utc};

use crate::errors::{DomainError, TokenError};
use crate::services::token::{
    decode, digest_base64, encode, generate_salt, MaxAge, TokenConfig, TokenService,
};

const ACCESS_SECRET: &str = "test-access-secret";
const CLIENT_SECRET: &str = "test-client-secret";

fn access_service() -> TokenService {
    TokenService::new(TokenConfig::access(ACCESS_SECRET)).unwrap()
}

fn client_service() -> TokenService {
    TokenService::new(TokenConfig::client(CLIENT_SECRET)).unwrap()
}

/// Forge a correctly signed token with a chosen issuance time
fn forge_token(issued_at_millis: i64, salt_bytes: usize, secret: &str) -> String {
    let issued_at = issued_at_millis.to_string();
    let salt = generate_salt(salt_bytes);
    let signature = digest_base64(&format!("{}{}{}", issued_at, salt, secret));
    encode(&[&issued_at, &salt, &signature])
}

#[test]
fn test_issued_token_validates_immediately() {
    let service = access_service();
    let token = service.issue();
    assert!(service.validate(&token));
}

#[test]
fn test_issued_token_structure() {
    let before = Utc::now().timestamp_millis();
    let token = access_service().issue();
    let after = Utc::now().timestamp_millis();

    let payload = decode(&token).unwrap();

    let issued_at = payload.issued_at_millis().unwrap();
    assert!(issued_at >= before && issued_at <= after);

    // 12 salt bytes hex-encode to 24 chars for the access class
    assert_eq!(payload.salt.len(), 24);

    // Signature is the digest over the embedded fields plus the secret
    let expected = digest_base64(&format!(
        "{}{}{}",
        payload.issued_at, payload.salt, ACCESS_SECRET
    ));
    assert_eq!(payload.signature, expected);
}

#[test]
fn test_client_tokens_use_shorter_salt() {
    let token = client_service().issue();
    let payload = decode(&token).unwrap();
    assert_eq!(payload.salt.len(), 16);
}

#[test]
fn test_cross_class_tokens_are_rejected() {
    let access = access_service();
    let client = client_service();

    let access_token = access.issue();
    let client_token = client.issue();

    assert!(access.validate(&access_token));
    assert!(client.validate(&client_token));

    assert!(!client.validate(&access_token));
    assert!(!access.validate(&client_token));
}

#[test]
fn test_same_salt_length_different_secret_is_rejected() {
    // Salt length does not matter; only the secret does
    let a = TokenService::new(TokenConfig::access("secret-one")).unwrap();
    let b = TokenService::new(TokenConfig::access("secret-two")).unwrap();

    let token = a.issue();
    assert!(a.validate(&token));
    assert!(!b.validate(&token));
}

#[test]
fn test_tampered_token_is_rejected() {
    let service = access_service();
    let token = service.issue();

    // Flip a single character near the middle, staying inside the
    // base64 alphabet
    let mid = token.len() / 2;
    let original = token.as_bytes()[mid];
    let replacement = if original == b'A' { b'B' } else { b'A' };
    let mut tampered = token.clone().into_bytes();
    tampered[mid] = replacement;
    let tampered = String::from_utf8(tampered).unwrap();

    assert_ne!(token, tampered);
    assert!(!service.validate(&tampered));
}

#[test]
fn test_arbitrary_text_is_rejected() {
    let service = access_service();
    assert!(!service.validate("alice-in-wonderland"));
    assert!(!service.validate(""));
    assert!(!service.validate("🦀🦀🦀"));
    assert!(!service.validate(&"A".repeat(10_000)));
}

#[test]
fn test_wonderland_triple_fails_on_timestamp() {
    // Decodes into three fields, but "alice" is not a timestamp
    let service = access_service();
    let token = BASE64.encode("alice::in::wonderland");
    assert!(!service.validate(&token));
    assert_eq!(service.inspect(&token), Err(TokenError::InvalidTimestamp));
}

#[test]
fn test_expired_token_is_rejected() {
    let service = access_service();
    let two_days_ago = (Utc::now() - Duration::days(2)).timestamp_millis();
    let stale = forge_token(two_days_ago, 12, ACCESS_SECRET);

    // Correctly signed, but older than the one-day default
    assert_eq!(service.inspect(&stale), Err(TokenError::TokenExpired));
    assert!(!service.validate(&stale));

    // A more lenient policy accepts the same token
    let lenient =
        TokenService::new(TokenConfig::access(ACCESS_SECRET).with_max_age(MaxAge::days(3)))
            .unwrap();
    assert!(lenient.validate(&stale));
}

#[test]
fn test_rejection_stages() {
    let service = access_service();

    assert_eq!(
        service.inspect("not-base64!!"),
        Err(TokenError::MalformedToken)
    );

    let now = Utc::now().timestamp_millis();
    let wrong_secret = forge_token(now, 12, "some-other-secret");
    assert_eq!(
        service.inspect(&wrong_secret),
        Err(TokenError::SignatureMismatch)
    );
}

#[test]
fn test_raw_secret_as_third_field_is_rejected() {
    // The third field is always a signature, never the secret itself
    let service = client_service();
    let issued_at = Utc::now().timestamp_millis().to_string();
    let salt = generate_salt(8);
    let token = encode(&[&issued_at, &salt, CLIENT_SECRET]);
    assert!(!service.validate(&token));
}

#[test]
fn test_empty_secret_is_rejected_at_construction() {
    let result = TokenService::new(TokenConfig::access(""));
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[test]
fn test_zero_salt_bytes_is_rejected_at_construction() {
    let mut config = TokenConfig::client("secret");
    config.salt_bytes = 0;
    let result = TokenService::new(config);
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[test]
fn test_issued_tokens_are_unique() {
    let service = access_service();
    let a = service.issue();
    let b = service.issue();
    // Even within one millisecond the salts differ
    assert_ne!(a, b);
}

#[test]
fn test_max_age_accessor() {
    let service =
        TokenService::new(TokenConfig::access(ACCESS_SECRET).with_max_age(MaxAge::hours(6)))
            .unwrap();
    assert_eq!(service.max_age(), MaxAge::hours(6));
}
