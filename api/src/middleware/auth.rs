//! JWT authentication middleware for protecting API endpoints.
//!
//! Extracts the bearer token from the Authorization header, verifies it with
//! the configured secret, and injects an [`AuthContext`] into the request
//! extensions for handlers to consume via the `FromRequest` impl.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use uuid::Uuid;

use signet_core::domain::entities::token::{Claims, JWT_ISSUER};
use signet_shared::types::response::ErrorResponse;

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID extracted from the JWT claims
    pub user_id: Uuid,
    /// Whether the token carries admin privileges
    pub is_admin: bool,
    /// JWT ID of the presented token
    pub jti: String,
}

impl AuthContext {
    /// Build a context from verified claims
    fn from_claims(claims: Claims) -> Result<Self, ()>{
        let user_id = claims.user_id().map_err(|_| ())?;
        Ok(Self {
            user_id,
            is_admin: claims.is_admin,
            jti: claims.jti,
        })
    }
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthContext>()
                .cloned()
                .ok_or_else(|| {
                    actix_web::error::ErrorUnauthorized(serde_json::to_string(
                        &ErrorResponse::new(
                            "unauthorized",
                            "Authentication credentials were not provided.",
                        ),
                    )
                    .unwrap_or_default())
                }),
        )
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    jwt_secret: String,
}

impl JwtAuth {
    /// Creates a middleware verifying tokens with the given secret
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            jwt_secret: self.jwt_secret.clone(),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    jwt_secret: String,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let jwt_secret = self.jwt_secret.clone();

        Box::pin(async move {
            let token = extract_bearer_token(&req).ok_or_else(|| {
                actix_web::error::ErrorUnauthorized(
                    serde_json::to_string(&ErrorResponse::new(
                        "unauthorized",
                        "Authentication credentials were not provided.",
                    ))
                    .unwrap_or_default(),
                )
            })?;

            let context = verify_token(&token, &jwt_secret).map_err(|_| {
                actix_web::error::ErrorUnauthorized(
                    serde_json::to_string(&ErrorResponse::new(
                        "token_not_valid",
                        "Token is invalid or expired",
                    ))
                    .unwrap_or_default(),
                )
            })?;

            req.extensions_mut().insert(context);
            service.call(req).await
        })
    }
}

/// Pull the token out of a `Bearer ...` Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}

/// Verify an access token against the configured secret.
///
/// Mirrors the token service's validation settings (issuer, nbf, no expiry
/// leeway) so the middleware and the service agree on what a valid token is.
fn verify_token(token: &str, secret: &str) -> Result<AuthContext, ()> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[JWT_ISSUER]);
    validation.validate_nbf = true;
    validation.leeway = 0;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|_| ())?;

    AuthContext::from_claims(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use signet_core::domain::entities::token::ACCESS_TOKEN_EXPIRY_DAYS;

    fn sign(claims: &Claims, secret: &str) -> String {
        jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            claims,
            &jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn verify_accepts_a_token_signed_with_the_same_secret() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new_access_token(user_id, true, ACCESS_TOKEN_EXPIRY_DAYS);
        let token = sign(&claims, "middleware-secret");

        let context = verify_token(&token, "middleware-secret").unwrap();
        assert_eq!(context.user_id, user_id);
        assert!(context.is_admin);
        assert_eq!(context.jti, claims.jti);
    }

    #[test]
    fn verify_rejects_wrong_secret_and_garbage() {
        let claims = Claims::new_access_token(Uuid::new_v4(), false, ACCESS_TOKEN_EXPIRY_DAYS);
        let token = sign(&claims, "one-secret");

        assert!(verify_token(&token, "another-secret").is_err());
        assert!(verify_token("garbage", "one-secret").is_err());
    }

    #[test]
    fn verify_rejects_expired_tokens() {
        let mut claims = Claims::new_access_token(Uuid::new_v4(), false, ACCESS_TOKEN_EXPIRY_DAYS);
        claims.exp = chrono::Utc::now().timestamp() - 10;
        let token = sign(&claims, "middleware-secret");

        assert!(verify_token(&token, "middleware-secret").is_err());
    }
}
