//! Authentication configuration for the two token classes

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Environment variable holding the access-token secret.
pub const ACCESS_SECRET_VAR: &str = "ACCESS_TOKEN_SECRET_KEY";

/// Environment variable holding the client-token secret.
pub const CLIENT_SECRET_VAR: &str = "CLIENT_SECRET_KEY";

/// Authentication configuration
///
/// Holds the shared secrets for both caller classes. The secrets are
/// deliberately loaded once at startup and handed to the token services,
/// rather than read from the environment on every call.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret key for access tokens (metric-submitting callers)
    pub access_secret: String,

    /// Secret key for client tokens (token-minting callers)
    pub client_secret: String,

    /// Token lifetime in days
    pub token_max_age_days: i64,
}

impl AuthConfig {
    /// Load authentication configuration from the environment.
    ///
    /// Both secrets are hard requirements: a missing or empty value is a
    /// startup error, never a silent default. An unset or unparseable
    /// `TOKEN_MAX_AGE_DAYS` falls back to one day.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            access_secret: require_secret(ACCESS_SECRET_VAR)?,
            client_secret: require_secret(CLIENT_SECRET_VAR)?,
            token_max_age_days: std::env::var("TOKEN_MAX_AGE_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
        })
    }
}

/// Read a secret from the environment, rejecting absent and empty values.
fn require_secret(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if value.is_empty() => Err(ConfigError::EmptyValue { name }),
        Ok(value) => Ok(value),
        Err(_) => Err(ConfigError::MissingVar { name }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment mutation is process-wide, so every scenario runs inside
    // this single test to keep them from racing each other.
    #[test]
    fn test_from_env_secret_requirements() {
        std::env::remove_var(ACCESS_SECRET_VAR);
        std::env::remove_var(CLIENT_SECRET_VAR);
        std::env::remove_var("TOKEN_MAX_AGE_DAYS");

        // Missing access secret fails
        let result = AuthConfig::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::MissingVar { name: ACCESS_SECRET_VAR })
        ));

        // Empty access secret fails
        std::env::set_var(ACCESS_SECRET_VAR, "");
        let result = AuthConfig::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::EmptyValue { name: ACCESS_SECRET_VAR })
        ));

        // Access secret present but client secret missing still fails
        std::env::set_var(ACCESS_SECRET_VAR, "access-secret");
        let result = AuthConfig::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::MissingVar { name: CLIENT_SECRET_VAR })
        ));

        // Both present succeeds with the one-day default lifetime
        std::env::set_var(CLIENT_SECRET_VAR, "client-secret");
        let config = AuthConfig::from_env().unwrap();
        assert_eq!(config.access_secret, "access-secret");
        assert_eq!(config.client_secret, "client-secret");
        assert_eq!(config.token_max_age_days, 1);

        // Explicit lifetime is honoured
        std::env::set_var("TOKEN_MAX_AGE_DAYS", "7");
        let config = AuthConfig::from_env().unwrap();
        assert_eq!(config.token_max_age_days, 7);

        // Garbage lifetime falls back to the default
        std::env::set_var("TOKEN_MAX_AGE_DAYS", "soon");
        let config = AuthConfig::from_env().unwrap();
        assert_eq!(config.token_max_age_days, 1);

        std::env::remove_var(ACCESS_SECRET_VAR);
        std::env::remove_var(CLIENT_SECRET_VAR);
        std::env::remove_var("TOKEN_MAX_AGE_DAYS");
    }
}
