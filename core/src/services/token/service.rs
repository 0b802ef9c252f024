//! Token issuance and validation for one caller class

use chrono::Utc;
use constant_time_eq::constant_time_eq;

use crate::errors::{DomainError, DomainResult, TokenError};

use super::codec::{self, TokenPayload};
use super::config::TokenConfig;
use super::expiry::MaxAge;
use super::hash::digest_base64;
use super::salt::generate_salt;

/// Mints and validates opaque tokens for a single caller class.
///
/// Two independent instances exist in the relay, one per caller class,
/// differing only in their secret and salt size. Instances share no
/// state; a token minted by one always fails signature verification on
/// the other.
///
/// All operations are synchronous and read only the immutable
/// configuration, so a service is safe to share across threads without
/// coordination.
pub struct TokenService {
    config: TokenConfig,
}

impl TokenService {
    /// Create a token service from its configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the secret is empty or no salt
    /// bytes are configured. Secrets are a startup concern; the service
    /// refuses to exist with a broken one rather than rejecting every
    /// token at runtime.
    pub fn new(config: TokenConfig) -> DomainResult<Self> {
        if config.secret.is_empty() {
            return Err(DomainError::Validation {
                message: "token secret must not be empty".to_string(),
            });
        }
        if config.salt_bytes == 0 {
            return Err(DomainError::Validation {
                message: "token salt byte count must be positive".to_string(),
            });
        }
        Ok(Self { config })
    }

    /// Issue a fresh token.
    ///
    /// The token embeds the current time in epoch milliseconds, a random
    /// salt and a signature over both plus the secret; no server-side
    /// record is kept.
    pub fn issue(&self) -> String {
        let issued_at = Utc::now().timestamp_millis().to_string();
        let salt = generate_salt(self.config.salt_bytes);
        let signature = self.sign(&issued_at, &salt);

        tracing::debug!(
            salt_bytes = self.config.salt_bytes,
            event = "token_issued",
            "Issued new token"
        );

        codec::encode(&[&issued_at, &salt, &signature])
    }

    /// Validate a presented token.
    ///
    /// Safe to call on arbitrary untrusted input. Every failure mode
    /// (malformed encoding, bad timestamp, signature mismatch, expiry)
    /// collapses to `false`; callers cannot distinguish why a token was
    /// rejected.
    pub fn validate(&self, token: &str) -> bool {
        match self.inspect(token) {
            Ok(_) => true,
            Err(reason) => {
                tracing::debug!(
                    error = %reason,
                    event = "token_rejected",
                    "Rejected presented token"
                );
                false
            }
        }
    }

    /// The expiration policy this service applies
    pub fn max_age(&self) -> MaxAge {
        self.config.max_age
    }

    /// Run the validation pipeline, keeping the failure stage.
    ///
    /// Decode, parse the timestamp, compare signatures, then check
    /// expiry; the first failing stage wins. The signature is recomputed
    /// over the raw embedded timestamp and salt strings and compared in
    /// constant time.
    pub(crate) fn inspect(&self, token: &str) -> Result<TokenPayload, TokenError> {
        let payload = codec::decode(token)?;
        let issued_at_millis = payload.issued_at_millis()?;

        let expected = self.sign(&payload.issued_at, &payload.salt);
        if !constant_time_eq(expected.as_bytes(), payload.signature.as_bytes()) {
            return Err(TokenError::SignatureMismatch);
        }

        if self.config.max_age.is_expired(issued_at_millis) {
            return Err(TokenError::TokenExpired);
        }

        Ok(payload)
    }

    /// Signature over the issuance timestamp, salt and the secret
    fn sign(&self, issued_at: &str, salt: &str) -> String {
        digest_base64(&format!("{}{}{}", issued_at, salt, self.config.secret))
    }
}
