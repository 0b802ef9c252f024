//! Metrics Backend Module
//!
//! This module provides the downstream ingestion implementations the
//! relay forwards validated metric batches to.
//!
//! ## Features
//!
//! - **Metrics Backend Trait**: Common interface for all providers
//! - **Mock Implementation**: In-memory recording for development
//! - **AWS CloudWatch Support**: Production ingestion via `PutMetricData`

use std::sync::Arc;

pub mod backend;
pub mod mock;
pub mod types;

// AWS CloudWatch backend (feature-gated)
#[cfg(feature = "aws-cloudwatch")]
pub mod cloudwatch;

// Re-export commonly used types
pub use backend::MetricsBackend;
pub use mock::MockMetricsBackend;
pub use types::{MetricBatch, MetricDimension, MetricEntry};

#[cfg(feature = "aws-cloudwatch")]
pub use cloudwatch::{CloudWatchBackend, CloudWatchConfig};

#[cfg(test)]
mod tests;

use rr_shared::config::MetricsConfig;

/// Create a metrics backend based on configuration
///
/// Returns the appropriate backend implementation based on the provider
/// specified in the configuration, falling back to the mock backend when
/// the configured provider cannot be initialized.
///
/// # Arguments
///
/// * `config` - Metrics configuration containing provider settings
///
/// # Returns
///
/// A shared metrics backend implementation
pub async fn create_metrics_backend(config: &MetricsConfig) -> Arc<dyn MetricsBackend> {
    match config.provider.as_str() {
        "mock" => Arc::new(MockMetricsBackend::new()),
        #[cfg(feature = "aws-cloudwatch")]
        "cloudwatch" => {
            let cloudwatch_config = CloudWatchConfig {
                region: config.region.clone(),
                default_namespace: config.namespace.clone(),
                max_retries: 3,
                retry_delay_ms: 1000,
            };

            match CloudWatchBackend::new(cloudwatch_config).await {
                Ok(backend) => Arc::new(backend),
                Err(e) => {
                    tracing::error!("Failed to initialize CloudWatch metrics backend: {}", e);
                    tracing::warn!("Falling back to mock metrics backend");
                    Arc::new(MockMetricsBackend::new())
                }
            }
        }
        other => {
            tracing::warn!("Unknown metrics provider '{}', using mock backend", other);
            Arc::new(MockMetricsBackend::new())
        }
    }
}
