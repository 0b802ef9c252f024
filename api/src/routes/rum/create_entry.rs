//! Handler for PUT /rum/create-entry

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use rr_infra::metrics::{MetricBatch, MetricsBackend};
use rr_infra::relay::RelayClient;
use rr_shared::types::ApiResponse;

use crate::dto::metrics::{CreateEntryRequest, CreateEntryResponse};
use crate::handlers::error::ApiError;

/// Application state holding the relay's external collaborators
pub struct AppState {
    /// Downstream ingestion backend
    pub backend: Arc<dyn MetricsBackend>,

    /// Namespace applied when a batch does not carry one
    pub namespace: String,

    /// Loopback client used by the smoke-test route
    pub relay: RelayClient,
}

/// Records a validated metric batch downstream.
///
/// The route is guarded by the access-token middleware, so by the time
/// this handler runs the caller has already proven possession of the
/// access secret. Payload problems come back as 400 with field details;
/// a refused downstream write comes back as 502.
pub async fn create_entry(
    state: web::Data<AppState>,
    request: web::Json<CreateEntryRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = request.validate_all() {
        log::warn!("Rejecting create-entry payload: {}", errors);
        return Err(ApiError::validation(&errors));
    }

    let mut batch = MetricBatch::from(request.into_inner());
    let namespace = batch.namespace_or(&state.namespace).to_string();
    batch.namespace = Some(namespace.clone());
    let entries_recorded = batch.metric_data.len();

    log::info!(
        "Relaying {} data point(s) under {} to {}",
        entries_recorded,
        namespace,
        state.backend.provider_name()
    );

    state.backend.put_metrics(&batch).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(CreateEntryResponse {
        namespace,
        entries_recorded,
    })))
}
