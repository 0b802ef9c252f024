//! Token service configuration

use super::expiry::MaxAge;

/// Salt bytes drawn for access tokens (96 bits of entropy)
pub const ACCESS_SALT_BYTES: usize = 12;

/// Salt bytes drawn for client tokens (64 bits of entropy)
pub const CLIENT_SALT_BYTES: usize = 8;

/// Configuration for one token service instance.
///
/// The secret is injected here at construction and never read from
/// ambient process state inside the issuance or validation logic, so a
/// service is fully testable with arbitrary secrets.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Shared secret for this caller class, folded into every signature
    /// but never embedded in a token
    pub secret: String,

    /// Number of random salt bytes drawn per issued token
    pub salt_bytes: usize,

    /// Maximum allowed token age
    pub max_age: MaxAge,
}

impl TokenConfig {
    /// Configuration for the access caller class
    pub fn access(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            salt_bytes: ACCESS_SALT_BYTES,
            max_age: MaxAge::default(),
        }
    }

    /// Configuration for the client caller class
    pub fn client(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            salt_bytes: CLIENT_SALT_BYTES,
            max_age: MaxAge::default(),
        }
    }

    /// Override the expiration policy
    pub fn with_max_age(mut self, max_age: MaxAge) -> Self {
        self.max_age = max_age;
        self
    }
}
