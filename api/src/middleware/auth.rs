//! Token authentication middleware for protected relay endpoints.
//!
//! The middleware extracts the bearer token from the Authorization
//! header and validates it against the token service of the route's
//! caller class. Every rejection - missing header, malformed token,
//! wrong secret, expired - produces the same 401 body; the response
//! never reveals which check failed.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use rr_core::errors::DomainResult;
use rr_core::services::token::{MaxAge, TokenConfig, TokenService};
use rr_shared::config::AuthConfig;

use crate::handlers::error::ApiError;

/// The two trust domains the relay authenticates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallerClass {
    /// Metric-submitting callers (create-entry)
    Access,
    /// Token-minting callers (token endpoint)
    Client,
}

/// Both token services, registered as app data once at startup.
///
/// The services share no state; a token minted by one always fails
/// validation on the other because their secrets differ.
pub struct TokenValidators {
    pub access: TokenService,
    pub client: TokenService,
}

impl TokenValidators {
    /// Build both services from the startup configuration.
    ///
    /// Fails when either secret is empty, which keeps a misconfigured
    /// relay from coming up at all.
    pub fn from_config(config: &AuthConfig) -> DomainResult<Self> {
        let max_age = MaxAge::days(config.token_max_age_days);
        Ok(Self {
            access: TokenService::new(
                TokenConfig::access(config.access_secret.clone()).with_max_age(max_age),
            )?,
            client: TokenService::new(
                TokenConfig::client(config.client_secret.clone()).with_max_age(max_age),
            )?,
        })
    }

    /// The token service for one caller class
    pub fn service(&self, class: CallerClass) -> &TokenService {
        match class {
            CallerClass::Access => &self.access,
            CallerClass::Client => &self.client,
        }
    }
}

/// Token authentication middleware factory
pub struct TokenAuth {
    class: CallerClass,
}

impl TokenAuth {
    /// Guard a route with access-token validation
    pub fn access() -> Self {
        Self {
            class: CallerClass::Access,
        }
    }

    /// Guard a route with client-token validation
    pub fn client() -> Self {
        Self {
            class: CallerClass::Client,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for TokenAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = TokenAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TokenAuthMiddleware {
            service: Rc::new(service),
            class: self.class,
        }))
    }
}

/// Token authentication middleware service
pub struct TokenAuthMiddleware<S> {
    service: Rc<S>,
    class: CallerClass,
}

impl<S, B> Service<ServiceRequest> for TokenAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let class = self.class;

        Box::pin(async move {
            let accepted = match req.app_data::<web::Data<TokenValidators>>() {
                Some(validators) => extract_bearer_token(&req)
                    .map(|token| validators.service(class).validate(&token))
                    .unwrap_or(false),
                None => {
                    // Wiring bug, not a caller problem; still reject
                    log::error!("TokenValidators not registered as app data");
                    false
                }
            };

            if !accepted {
                let (req, _payload) = req.into_parts();
                let response = ApiError::unauthorized()
                    .error_response()
                    .map_into_right_body();
                return Ok(ServiceResponse::new(req, response));
            }

            service.call(req).await.map(|res| res.map_into_left_body())
        })
    }
}

/// Extracts the bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_extract_bearer_token() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer opaque-token-123"))
            .to_srv_request();
        assert_eq!(
            extract_bearer_token(&req),
            Some("opaque-token-123".to_string())
        );

        let req_no_bearer = TestRequest::default()
            .insert_header((AUTHORIZATION, "opaque-token-123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_no_header = TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }

    #[test]
    fn test_validators_from_config() {
        let config = AuthConfig {
            access_secret: "access-secret".to_string(),
            client_secret: "client-secret".to_string(),
            token_max_age_days: 2,
        };

        let validators = TokenValidators::from_config(&config).unwrap();
        assert_eq!(validators.access.max_age(), MaxAge::days(2));

        let token = validators.service(CallerClass::Access).issue();
        assert!(validators.access.validate(&token));
        assert!(!validators.client.validate(&token));
    }

    #[test]
    fn test_empty_secret_fails_construction() {
        let config = AuthConfig {
            access_secret: String::new(),
            client_secret: "client-secret".to_string(),
            token_max_age_days: 1,
        };
        assert!(TokenValidators::from_config(&config).is_err());
    }
}
