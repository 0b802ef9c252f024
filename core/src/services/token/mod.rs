//! Token service module for the shared-secret token scheme
//!
//! This module handles all token-related operations:
//! - Random salt generation
//! - Keyed signature hashing
//! - The opaque wire codec (delimiter-joined fields, base64-encoded)
//! - Expiration policy
//! - Issuing and validating tokens for one caller class

mod codec;
mod config;
mod expiry;
mod hash;
mod salt;
mod service;

#[cfg(test)]
mod tests;

pub use codec::{decode, encode, TokenPayload, DELIMITER};
pub use config::{TokenConfig, ACCESS_SALT_BYTES, CLIENT_SALT_BYTES};
pub use expiry::MaxAge;
pub use hash::digest_base64;
pub use salt::generate_salt;
pub use service::TokenService;
