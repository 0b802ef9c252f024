//! Relay HTTP client
//!
//! The loopback client used by the smoke-test route. It calls the
//! relay's own protected create-entry endpoint exactly the way an
//! external caller would, bearer token included, so one request
//! exercises issuance, validation and the downstream forward together.

use std::time::Duration;
use tracing::debug;

use crate::metrics::MetricBatch;
use crate::InfrastructureError;

/// Relay client configuration
#[derive(Debug, Clone)]
pub struct RelayClientConfig {
    /// Base URL of the relay itself, e.g. "http://127.0.0.1:8080"
    pub base_url: String,
    /// Timeout for the loopback request in seconds
    pub request_timeout_secs: u64,
}

impl Default for RelayClientConfig {
    fn default() -> Self {
        Self::loopback(8080)
    }
}

impl RelayClientConfig {
    /// Configuration pointing at this process's own listener
    pub fn loopback(port: u16) -> Self {
        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            request_timeout_secs: 10,
        }
    }
}

/// HTTP client for submitting metric batches to a relay instance
pub struct RelayClient {
    client: reqwest::Client,
    config: RelayClientConfig,
}

impl RelayClient {
    /// Create a new relay client
    pub fn new(config: RelayClientConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Submit a metric batch to the relay's create-entry endpoint.
    ///
    /// Returns the endpoint's JSON response body; a non-success status
    /// becomes a metrics error carrying the status and body.
    pub async fn create_entry(
        &self,
        token: &str,
        batch: &MetricBatch,
    ) -> Result<serde_json::Value, InfrastructureError> {
        let url = create_entry_url(&self.config.base_url);

        debug!(url = %url, entries = batch.metric_data.len(), "Relaying metric batch");

        let response = self
            .client
            .put(&url)
            .header("Authorization", format!("Bearer {}", token))
            .json(batch)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(InfrastructureError::Metrics(format!(
                "create-entry returned {}: {}",
                status.as_u16(),
                body
            )));
        }

        let value = serde_json::from_str::<serde_json::Value>(&body)
            .unwrap_or_else(|_| serde_json::Value::String(body));
        Ok(value)
    }
}

fn create_entry_url(base_url: &str) -> String {
    format!("{}/rum/create-entry", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_url_building() {
        assert_eq!(
            create_entry_url("http://127.0.0.1:8080"),
            "http://127.0.0.1:8080/rum/create-entry"
        );
        assert_eq!(
            create_entry_url("http://127.0.0.1:8080/"),
            "http://127.0.0.1:8080/rum/create-entry"
        );
    }

    #[test]
    fn test_loopback_config() {
        let config = RelayClientConfig::loopback(9090);
        assert_eq!(config.base_url, "http://127.0.0.1:9090");

        let client = RelayClient::new(config);
        assert!(client.is_ok());
    }
}
