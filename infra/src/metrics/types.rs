//! Metric data types
//!
//! These mirror the shape of a CloudWatch `PutMetricData` request body, so
//! callers submit the same PascalCase JSON they would hand to the
//! ingestion API directly and the relay forwards it without translation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single dimension attached to a metric entry
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricDimension {
    pub name: String,
    pub value: String,
}

/// One metric data point
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricEntry {
    /// Metric name, e.g. "FIRST_CONTENTFUL_PAINT"
    pub metric_name: String,

    /// Observed value
    pub value: f64,

    /// Ingestion unit, e.g. "Count" or "Milliseconds"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// Dimensions to slice the metric by
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Vec<MetricDimension>>,

    /// Explicit observation time; the backend applies its own arrival
    /// time when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl MetricEntry {
    /// A bare name/value data point
    pub fn new(metric_name: impl Into<String>, value: f64) -> Self {
        Self {
            metric_name: metric_name.into(),
            value,
            unit: None,
            dimensions: None,
            timestamp: None,
        }
    }
}

/// A batch of metric entries recorded under one namespace
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricBatch {
    /// Namespace for every entry in the batch; the relay falls back to
    /// its configured namespace when this is absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// The data points to record
    pub metric_data: Vec<MetricEntry>,
}

impl MetricBatch {
    /// Create a batch under an explicit namespace
    pub fn new(namespace: impl Into<String>, metric_data: Vec<MetricEntry>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            metric_data,
        }
    }

    /// Convenience constructor for a single data point
    pub fn single(namespace: impl Into<String>, metric_name: impl Into<String>, value: f64) -> Self {
        Self::new(namespace, vec![MetricEntry::new(metric_name, value)])
    }

    /// The namespace to record under, falling back to `default` when the
    /// batch carries none
    pub fn namespace_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.namespace
            .as_deref()
            .filter(|ns| !ns.is_empty())
            .unwrap_or(default)
    }

    /// Whether the batch carries anything worth forwarding
    pub fn is_empty(&self) -> bool {
        self.metric_data.is_empty()
    }
}
