//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Token secrets for the two caller classes
//! - `environment` - Environment detection
//! - `metrics` - Downstream metrics ingestion backend
//! - `server` - HTTP server configuration

pub mod auth;
pub mod environment;
pub mod metrics;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use auth::AuthConfig;
pub use environment::Environment;
pub use metrics::MetricsConfig;
pub use server::ServerConfig;

/// Errors raised while assembling configuration from the environment.
///
/// These are startup errors: the relay must refuse to come up rather than
/// serve traffic with a broken configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {name} is not set")]
    MissingVar { name: &'static str },

    #[error("environment variable {name} is set but empty")]
    EmptyValue { name: &'static str },

    #[error("environment variable {name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Metrics backend configuration
    pub metrics: MetricsConfig,
}

impl AppConfig {
    /// Load the complete configuration from the environment.
    ///
    /// Fails when a hard requirement is unmet: both token secrets must be
    /// present and non-empty, and the server port must parse. Optional
    /// values fall back to their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            auth: AuthConfig::from_env()?,
            metrics: MetricsConfig::from_env(),
        })
    }
}
