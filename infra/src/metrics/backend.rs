//! Metrics Backend Interface
//!
//! Defines the trait for downstream metrics ingestion implementations.

use async_trait::async_trait;

use super::types::MetricBatch;
use crate::InfrastructureError;

/// Metrics backend trait for recording relayed metric batches
///
/// Implementations include:
/// - AWS CloudWatch
/// - Mock implementation for development and tests
#[async_trait]
pub trait MetricsBackend: Send + Sync {
    /// Record a batch of metric data points downstream
    ///
    /// # Arguments
    ///
    /// * `batch` - The namespace and data points to record
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The batch was accepted by the backend
    /// * `Err(InfrastructureError)` - If recording fails
    async fn put_metrics(&self, batch: &MetricBatch) -> Result<(), InfrastructureError>;

    /// Get the backend provider name
    ///
    /// Returns the name of the ingestion provider (e.g., "AWS CloudWatch", "Mock")
    fn provider_name(&self) -> &str;

    /// Check if the backend is reachable
    ///
    /// Default implementation always returns true.
    async fn is_available(&self) -> bool {
        true
    }
}
