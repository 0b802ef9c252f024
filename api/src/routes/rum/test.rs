//! Handler for GET /rum/test

use actix_web::{web, HttpResponse};

use rr_infra::metrics::MetricBatch;
use rr_shared::types::ApiResponse;

use crate::handlers::error::ApiError;
use crate::middleware::auth::TokenValidators;
use crate::routes::rum::create_entry::AppState;

/// Metric name submitted by the smoke test
const TEST_METRIC_NAME: &str = "HELLO_WORLD";

/// Value submitted by the smoke test
const TEST_METRIC_VALUE: f64 = 100.0;

/// End-to-end smoke test.
///
/// Mints an access token and submits one HELLO_WORLD datum through the
/// relay's own create-entry endpoint, exactly the way an external
/// caller would. One request exercises issuance, validation and the
/// downstream forward together; the downstream response is passed back
/// verbatim.
pub async fn smoke_test(
    state: web::Data<AppState>,
    validators: web::Data<TokenValidators>,
) -> Result<HttpResponse, ApiError> {
    let token = validators.access.issue();
    let batch = MetricBatch::single(state.namespace.clone(), TEST_METRIC_NAME, TEST_METRIC_VALUE);

    log::info!("Running loopback smoke test");
    let downstream = state.relay.create_entry(&token, &batch).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(downstream)))
}
