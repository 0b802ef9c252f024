//! Error to HTTP response mapping
//!
//! Every failure leaving the API goes through `ApiError`, so callers see
//! one consistent JSON error shape. Authentication failures are a single
//! uniform 401 body: the relay never tells a caller whether its token was
//! malformed, forged or merely stale.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::collections::HashMap;
use std::fmt;
use validator::ValidationErrors;

use rr_core::errors::DomainError;
use rr_infra::InfrastructureError;
use rr_shared::errors::{error_codes, ErrorResponse};

/// API error carrying the HTTP status and response body the caller sees
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    /// The uniform authentication rejection.
    ///
    /// Deliberately identical for every rejection reason; anything else
    /// would hand an attacker an oracle for probing token internals.
    pub fn unauthorized() -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            body: ErrorResponse::new(error_codes::UNAUTHORIZED, "Authentication required"),
        }
    }

    /// 400 carrying the per-field validation failures
    pub fn validation(errors: &ValidationErrors) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request payload")
                .with_details(validation_details(errors)),
        }
    }

    /// 404 for unknown routes
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: ErrorResponse::new(
                error_codes::NOT_FOUND,
                "The requested resource was not found",
            ),
        }
    }

    /// 502 for a failed downstream ingestion call
    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            body: ErrorResponse::new(error_codes::METRICS_ERROR, message),
        }
    }

    /// 500 for anything the relay cannot attribute to the caller
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorResponse::new(error_codes::INTERNAL_ERROR, message),
        }
    }

    /// The response body this error renders to
    pub fn body(&self) -> &ErrorResponse {
        &self.body
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.body.error, self.body.message)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        if self.status.is_server_error() {
            log::error!("API error {}: {}", self.status, self.body.message);
        }
        HttpResponse::build(self.status).json(&self.body)
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::Unauthorized | DomainError::Token(_) => Self::unauthorized(),
            DomainError::Validation { message } => Self {
                status: StatusCode::BAD_REQUEST,
                body: ErrorResponse::new(error_codes::VALIDATION_ERROR, message),
            },
            DomainError::Internal { message } => Self::internal(message),
        }
    }
}

impl From<InfrastructureError> for ApiError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::Metrics(message) => Self::bad_gateway(message),
            InfrastructureError::Http(e) => Self::bad_gateway(e.to_string()),
            other => Self::internal(other.to_string()),
        }
    }
}

/// Flatten validator output into a field -> messages detail map
fn validation_details(errors: &ValidationErrors) -> HashMap<String, serde_json::Value> {
    let mut details = HashMap::new();
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        details.insert(field.to_string(), serde_json::json!(messages));
    }
    details
}
