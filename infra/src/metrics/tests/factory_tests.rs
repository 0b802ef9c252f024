//! Unit tests for the metrics backend factory

use rr_shared::config::MetricsConfig;

use crate::metrics::create_metrics_backend;

#[tokio::test]
async fn test_mock_provider_creates_mock_backend() {
    let config = MetricsConfig {
        provider: "mock".to_string(),
        ..Default::default()
    };

    let backend = create_metrics_backend(&config).await;
    assert_eq!(backend.provider_name(), "Mock");
}

#[tokio::test]
async fn test_unknown_provider_falls_back_to_mock() {
    let config = MetricsConfig {
        provider: "statsd".to_string(),
        ..Default::default()
    };

    let backend = create_metrics_backend(&config).await;
    assert_eq!(backend.provider_name(), "Mock");
}
