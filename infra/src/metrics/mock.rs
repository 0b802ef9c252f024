//! Mock Metrics Backend Implementation
//!
//! A mock implementation of the metrics backend for development and
//! testing. Batches are logged and kept in memory instead of being sent
//! anywhere, so tests can inspect exactly what the relay forwarded.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tracing::info;

use super::backend::MetricsBackend;
use super::types::MetricBatch;
use crate::InfrastructureError;

/// Mock metrics backend for development and testing
///
/// This implementation:
/// - Logs every batch instead of recording it downstream
/// - Retains batches in memory for inspection
/// - Can simulate backend failures
#[derive(Clone)]
pub struct MockMetricsBackend {
    /// Every batch accepted so far, in arrival order
    batches: Arc<Mutex<Vec<MetricBatch>>>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
}

impl MockMetricsBackend {
    /// Create a new mock backend
    pub fn new() -> Self {
        Self {
            batches: Arc::new(Mutex::new(Vec::new())),
            simulate_failure: false,
        }
    }

    /// Create a mock backend that fails every put
    pub fn failing() -> Self {
        Self {
            batches: Arc::new(Mutex::new(Vec::new())),
            simulate_failure: true,
        }
    }

    /// Batches accepted so far, in arrival order
    pub fn recorded_batches(&self) -> Vec<MetricBatch> {
        self.batches
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Number of batches accepted so far
    pub fn batch_count(&self) -> usize {
        self.batches.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Forget everything recorded
    pub fn reset(&self) {
        self.batches
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl Default for MockMetricsBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetricsBackend for MockMetricsBackend {
    async fn put_metrics(&self, batch: &MetricBatch) -> Result<(), InfrastructureError> {
        if self.simulate_failure {
            return Err(InfrastructureError::Metrics(
                "Simulated metrics backend failure".to_string(),
            ));
        }

        if batch.is_empty() {
            return Err(InfrastructureError::Metrics(
                "Metric batch contains no data points".to_string(),
            ));
        }

        info!(
            namespace = batch.namespace.as_deref().unwrap_or(""),
            entries = batch.metric_data.len(),
            event = "mock_metrics_recorded",
            "Recorded metric batch in mock backend"
        );

        self.batches
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(batch.clone());

        Ok(())
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
