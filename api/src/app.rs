//! Application factory
//!
//! Assembles the actix-web application: shared state, middleware and
//! the relay's routes. Both the binary and the integration tests build
//! the app through `create_app` so they exercise the same wiring.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware::Logger, web, App, Error, HttpResponse, ResponseError};

use crate::handlers::error::ApiError;
use crate::middleware::auth::{TokenAuth, TokenValidators};
use crate::middleware::cors::create_cors;
use crate::routes::rum::{
    create_entry::create_entry, test::smoke_test, token::issue_token, AppState,
};

/// Create and configure the application with all dependencies.
///
/// The create-entry route requires an access token, the token route a
/// client token; the smoke test and health check are open.
pub fn create_app(
    state: web::Data<AppState>,
    validators: web::Data<TokenValidators>,
    max_payload_size: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let cors = create_cors();

    App::new()
        // Shared state
        .app_data(state)
        .app_data(validators)
        .app_data(web::JsonConfig::default().limit(max_payload_size))
        // Middleware (registered last runs first: CORS before logging)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Relay routes
        .service(
            web::scope("/rum")
                .route("/test", web::get().to(smoke_test))
                .route(
                    "/create-entry",
                    web::put().to(create_entry).wrap(TokenAuth::access()),
                )
                .route(
                    "/token",
                    web::post().to(issue_token).wrap(TokenAuth::client()),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "rum-relay-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default handler for unknown routes
async fn not_found() -> HttpResponse {
    ApiError::not_found().error_response()
}
