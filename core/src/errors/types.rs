//! Token-specific error types
//!
//! These variants mirror the stages of the validation pipeline. Callers of
//! the public `validate` API never see them; every variant collapses to a
//! rejection so an adversary cannot learn why a token was refused.

use thiserror::Error;

/// Token validation errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// The token is not valid base64, not UTF-8, or does not carry
    /// exactly three non-empty fields
    #[error("Malformed token")]
    MalformedToken,

    /// The embedded issuance timestamp is not an integer
    #[error("Invalid timestamp")]
    InvalidTimestamp,

    /// The recomputed signature differs from the embedded one
    #[error("Invalid signature")]
    SignatureMismatch,

    /// Correctly signed but older than the allowed maximum age
    #[error("Token expired")]
    TokenExpired,
}
