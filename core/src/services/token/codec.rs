//! Opaque token wire codec
//!
//! A token is the base64 encoding of three fields joined by a fixed
//! delimiter. Splitting is a literal string split with no escaping; the
//! fields this scheme encodes (numeric timestamps, hex salts, base64
//! digests) never contain the delimiter, which is a documented constraint
//! of the format rather than an accident.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::errors::TokenError;

/// Field delimiter inside the decoded token
pub const DELIMITER: &str = "::";

/// Decoded token contents.
///
/// All fields are kept as the raw embedded strings. Signature
/// recomputation must run over these exact bytes, so the timestamp is
/// only parsed to an integer where the expiration check needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPayload {
    /// Issuance time, integer milliseconds since epoch as a string
    pub issued_at: String,

    /// Random hex salt
    pub salt: String,

    /// Base64 digest of `issued_at + salt + secret`
    pub signature: String,
}

impl TokenPayload {
    /// Build a payload from decoded fields.
    ///
    /// A payload is well-formed iff there are exactly three non-empty
    /// fields in issuance-salt-signature order.
    pub fn from_fields(fields: &[&str]) -> Result<Self, TokenError> {
        match fields {
            [issued_at, salt, signature]
                if !issued_at.is_empty() && !salt.is_empty() && !signature.is_empty() =>
            {
                Ok(Self {
                    issued_at: issued_at.to_string(),
                    salt: salt.to_string(),
                    signature: signature.to_string(),
                })
            }
            _ => Err(TokenError::MalformedToken),
        }
    }

    /// Encode this payload into its opaque wire form
    pub fn encode(&self) -> String {
        encode(&[&self.issued_at, &self.salt, &self.signature])
    }

    /// Parse the embedded issuance timestamp as epoch milliseconds
    pub fn issued_at_millis(&self) -> Result<i64, TokenError> {
        self.issued_at
            .parse()
            .map_err(|_| TokenError::InvalidTimestamp)
    }
}

/// Join fields with the delimiter and base64-encode the result
pub fn encode(fields: &[&str]) -> String {
    BASE64.encode(fields.join(DELIMITER))
}

/// Decode an opaque token back into its payload.
///
/// Tolerates arbitrary untrusted input: bad base64, non-UTF-8 bytes and
/// wrong field counts all come back as `MalformedToken`, never a panic.
/// This is the gateway that keeps tampered tokens from crashing the
/// validator.
pub fn decode(token: &str) -> Result<TokenPayload, TokenError> {
    let bytes = BASE64
        .decode(token)
        .map_err(|_| TokenError::MalformedToken)?;
    let joined = String::from_utf8(bytes).map_err(|_| TokenError::MalformedToken)?;
    let fields: Vec<&str> = joined.split(DELIMITER).collect();
    TokenPayload::from_fields(&fields)
}
