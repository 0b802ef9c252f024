//! Metrics backend configuration

use serde::{Deserialize, Serialize};

/// Configuration for the downstream metrics ingestion backend
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricsConfig {
    /// Backend provider name ("cloudwatch" or "mock")
    pub provider: String,

    /// Namespace under which relayed metrics are recorded
    pub namespace: String,

    /// AWS region for the CloudWatch backend
    pub region: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            provider: "cloudwatch".to_string(),
            namespace: "RumRelay/RUM".to_string(),
            region: "eu-west-1".to_string(),
        }
    }
}

impl MetricsConfig {
    /// Load metrics configuration from the environment, keeping defaults
    /// for anything unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(provider) = std::env::var("METRICS_PROVIDER") {
            if !provider.is_empty() {
                config.provider = provider;
            }
        }

        if let Ok(namespace) = std::env::var("RUM_NAMESPACE") {
            if !namespace.is_empty() {
                config.namespace = namespace;
            }
        }

        if let Ok(region) = std::env::var("AWS_REGION") {
            if !region.is_empty() {
                config.region = region;
            }
        }

        config
    }
}
