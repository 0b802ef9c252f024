//! Handler for POST /rum/token

use actix_web::{web, HttpResponse};

use rr_shared::types::ApiResponse;

use crate::dto::token::IssueTokenResponse;
use crate::middleware::auth::TokenValidators;

/// Mints a fresh access token.
///
/// The route is guarded by the client-token middleware: only a caller
/// holding a valid client token may trade it for an access token usable
/// against create-entry.
pub async fn issue_token(validators: web::Data<TokenValidators>) -> HttpResponse {
    let access_token = validators.access.issue();
    let expires_in = validators.access.max_age().as_millis() / 1000;

    log::info!("Minted access token valid for {}s", expires_in);

    HttpResponse::Ok().json(ApiResponse::success(IssueTokenResponse {
        access_token,
        expires_in,
    }))
}
