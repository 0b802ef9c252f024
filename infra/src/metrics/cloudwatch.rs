//! AWS CloudWatch Metrics Backend Implementation
//!
//! This module records relayed metric batches via the CloudWatch
//! `PutMetricData` API.
//!
//! ## Features
//!
//! - Forwards the caller-supplied namespace, falling back to the
//!   configured default
//! - Automatic retry logic with exponential backoff
//! - Rate limiting handling
//! - Batch size guard matching the ingestion API limit

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_cloudwatch::{
    config::Region,
    primitives::DateTime,
    types::{Dimension, MetricDatum, StandardUnit},
    Client as CloudWatchClient,
};
use std::time::Duration;
use tracing::{debug, error, info, warn};

use super::backend::MetricsBackend;
use super::types::{MetricBatch, MetricEntry};
use crate::InfrastructureError;

/// PutMetricData accepts at most this many data points per call
const MAX_DATA_POINTS_PER_CALL: usize = 1000;

/// AWS CloudWatch backend configuration
#[derive(Debug, Clone)]
pub struct CloudWatchConfig {
    /// AWS Region (e.g., "eu-west-1")
    pub region: String,
    /// Namespace applied when a batch carries none
    pub default_namespace: String,
    /// Maximum retry attempts for failed requests
    pub max_retries: u32,
    /// Initial retry delay in milliseconds
    pub retry_delay_ms: u64,
}

impl CloudWatchConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let region = std::env::var("AWS_REGION").unwrap_or_else(|_| "eu-west-1".to_string());

        let default_namespace =
            std::env::var("RUM_NAMESPACE").unwrap_or_else(|_| "RumRelay/RUM".to_string());

        Ok(Self {
            region,
            default_namespace,
            max_retries: std::env::var("CLOUDWATCH_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            retry_delay_ms: std::env::var("CLOUDWATCH_RETRY_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
        })
    }
}

/// AWS CloudWatch metrics backend implementation
pub struct CloudWatchBackend {
    client: CloudWatchClient,
    config: CloudWatchConfig,
}

impl CloudWatchBackend {
    /// Create a new CloudWatch backend.
    ///
    /// Credentials come from the default AWS provider chain (environment,
    /// profile, instance role); only the region is set explicitly.
    pub async fn new(config: CloudWatchConfig) -> Result<Self, InfrastructureError> {
        let region = Region::new(config.region.clone());
        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .load()
            .await;

        let client = CloudWatchClient::new(&aws_config);

        info!(
            region = %config.region,
            namespace = %config.default_namespace,
            "AWS CloudWatch metrics backend initialized"
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub async fn from_env() -> Result<Self, InfrastructureError> {
        let config = CloudWatchConfig::from_env()?;
        Self::new(config).await
    }

    /// Convert one entry into the SDK data point type
    fn to_datum(entry: &MetricEntry) -> MetricDatum {
        let mut datum = MetricDatum::builder()
            .metric_name(&entry.metric_name)
            .value(entry.value);

        if let Some(ref unit) = entry.unit {
            datum = datum.unit(StandardUnit::from(unit.as_str()));
        }

        if let Some(ref dimensions) = entry.dimensions {
            for dimension in dimensions {
                datum = datum.dimensions(
                    Dimension::builder()
                        .name(&dimension.name)
                        .value(&dimension.value)
                        .build(),
                );
            }
        }

        if let Some(timestamp) = entry.timestamp {
            datum = datum.timestamp(DateTime::from_millis(timestamp.timestamp_millis()));
        }

        datum.build()
    }

    /// Record a batch with retry logic
    async fn put_with_retry(
        &self,
        namespace: &str,
        data: Vec<MetricDatum>,
    ) -> Result<(), InfrastructureError> {
        let mut attempts = 0;
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);

        loop {
            attempts += 1;

            debug!(
                "Recording {} data points under {} (attempt {}/{})",
                data.len(),
                namespace,
                attempts,
                self.config.max_retries
            );

            let result = self
                .client
                .put_metric_data()
                .namespace(namespace)
                .set_metric_data(Some(data.clone()))
                .send()
                .await;

            match result {
                Ok(_) => {
                    info!(
                        namespace = namespace,
                        entries = data.len(),
                        event = "metrics_recorded",
                        "Recorded metric batch in CloudWatch"
                    );
                    return Ok(());
                }
                Err(e) => {
                    error!(
                        "Failed to record metrics in CloudWatch (attempt {}/{}): {}",
                        attempts, self.config.max_retries, e
                    );

                    if attempts >= self.config.max_retries {
                        return Err(InfrastructureError::Metrics(format!(
                            "Failed to record metrics after {} attempts: {}",
                            self.config.max_retries, e
                        )));
                    }

                    let error_msg = e.to_string();

                    if error_msg.contains("Throttling") || error_msg.contains("LimitExceeded") {
                        warn!("Rate limit detected, backing off for {:?}", delay);
                    } else if error_msg.contains("InvalidParameter")
                        || error_msg.contains("MissingParameter")
                        || error_msg.contains("MalformedInput")
                    {
                        // Don't retry on validation errors
                        return Err(InfrastructureError::Metrics(format!(
                            "Invalid metric data rejected by CloudWatch: {}",
                            e
                        )));
                    }

                    tokio::time::sleep(delay).await;
                    delay *= 2; // Exponential backoff
                }
            }
        }
    }
}

#[async_trait]
impl MetricsBackend for CloudWatchBackend {
    async fn put_metrics(&self, batch: &MetricBatch) -> Result<(), InfrastructureError> {
        if batch.is_empty() {
            return Err(InfrastructureError::Metrics(
                "Metric batch contains no data points".to_string(),
            ));
        }

        if batch.metric_data.len() > MAX_DATA_POINTS_PER_CALL {
            return Err(InfrastructureError::Metrics(format!(
                "Metric batch exceeds {} data points per call",
                MAX_DATA_POINTS_PER_CALL
            )));
        }

        let namespace = batch.namespace_or(&self.config.default_namespace);
        let data = batch.metric_data.iter().map(Self::to_datum).collect();

        self.put_with_retry(namespace, data).await
    }

    fn provider_name(&self) -> &str {
        "AWS CloudWatch"
    }

    async fn is_available(&self) -> bool {
        // Lightweight call that verifies credentials and connectivity
        match self.client.list_metrics().send().await {
            Ok(_) => {
                debug!("CloudWatch health check passed");
                true
            }
            Err(e) => {
                warn!("CloudWatch health check failed: {}", e);
                false
            }
        }
    }
}
