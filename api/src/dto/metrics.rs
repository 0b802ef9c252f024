//! Metric submission DTOs
//!
//! The create-entry body is the same PascalCase JSON a caller would hand
//! to the CloudWatch `PutMetricData` API directly. The relay validates
//! the envelope here and converts it into the infra batch types before
//! forwarding; handlers never touch the raw JSON shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use rr_infra::metrics::{MetricBatch, MetricDimension, MetricEntry};

/// A metric batch submitted to the create-entry endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateEntryRequest {
    /// Namespace to record under; the relay's configured namespace
    /// applies when absent
    #[validate(length(min = 1, max = 255))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// The data points to record; the ingestion API caps a single call
    /// at 1000 points
    #[validate(length(min = 1, max = 1000))]
    pub metric_data: Vec<MetricDatumDto>,
}

/// One submitted data point
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct MetricDatumDto {
    #[validate(length(min = 1, max = 255))]
    pub metric_name: String,

    pub value: f64,

    #[validate(length(min = 1, max = 32))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[validate(length(max = 30))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Vec<DimensionDto>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// A dimension attached to a data point
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DimensionDto {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(min = 1, max = 255))]
    pub value: String,
}

impl CreateEntryRequest {
    /// Validate the envelope and every data point it carries.
    ///
    /// The derive only covers top-level fields, so the nested data
    /// points and their dimensions are walked explicitly.
    pub fn validate_all(&self) -> Result<(), ValidationErrors> {
        self.validate()?;
        for datum in &self.metric_data {
            datum.validate()?;
            for dimension in datum.dimensions.iter().flatten() {
                dimension.validate()?;
            }
        }
        Ok(())
    }
}

impl From<CreateEntryRequest> for MetricBatch {
    fn from(request: CreateEntryRequest) -> Self {
        MetricBatch {
            namespace: request.namespace,
            metric_data: request.metric_data.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<MetricDatumDto> for MetricEntry {
    fn from(datum: MetricDatumDto) -> Self {
        MetricEntry {
            metric_name: datum.metric_name,
            value: datum.value,
            unit: datum.unit,
            dimensions: datum
                .dimensions
                .map(|dims| dims.into_iter().map(Into::into).collect()),
            timestamp: datum.timestamp,
        }
    }
}

impl From<DimensionDto> for MetricDimension {
    fn from(dimension: DimensionDto) -> Self {
        MetricDimension {
            name: dimension.name,
            value: dimension.value,
        }
    }
}

/// Response returned after a batch is accepted downstream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEntryResponse {
    /// Namespace the batch was recorded under
    pub namespace: String,

    /// Number of data points forwarded
    pub entries_recorded: usize,
}
