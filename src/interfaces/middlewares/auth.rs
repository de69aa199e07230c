use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::StatusCode,
    web, Error, HttpMessage, HttpResponse,
};
use futures_util::future::{ok, Ready, LocalBoxFuture};
use std::{rc::Rc, task::{Context, Poll}};

use crate::{entities::token::Claims, errors::AuthError, handlers::json_error::json_error, AppState};

const ADMIN_PREFIX: &str = "/api/v1/admin";
const LOGIN_PATH: &str = "/api/v1/admin/login";

/// Guards the admin API with a bearer token. Everything outside
/// `/api/v1/admin` and the login endpoint itself pass through untouched.
pub struct AuthMiddleware;

impl<S> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service: Rc::new(service),
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if is_public_route(req.path(), req.method().as_str()) {
                return service.call(req).await;
            }

            let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
                tracing::error!("AppState missing in auth middleware");
                return Ok(custom_error_response(
                    req,
                    json_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
                ));
            };

            let claims = match get_valid_claims(&req, &state) {
                Ok(claims) => claims,
                Err(AuthError::MissingCredentials) => {
                    tracing::warn!(path = req.path(), "Missing or malformed Authorization header");
                    return Ok(custom_error_response(
                        req,
                        json_error(StatusCode::UNAUTHORIZED, "Missing credentials"),
                    ));
                }
                Err(AuthError::TokenExpired) => {
                    tracing::warn!(path = req.path(), "Expired admin token");
                    return Ok(custom_error_response(
                        req,
                        json_error(StatusCode::UNAUTHORIZED, "Token has expired"),
                    ));
                }
                Err(e) => {
                    tracing::warn!(path = req.path(), "Rejected admin token: {}", e);
                    return Ok(custom_error_response(
                        req,
                        json_error(StatusCode::UNAUTHORIZED, "Invalid token"),
                    ));
                }
            };

            if let Err(forbidden_response) = enforce_admin_access(&claims) {
                return Ok(custom_error_response(req, forbidden_response));
            }

            req.extensions_mut().insert(claims);
            service.call(req).await
        })
    }
}

fn is_public_route(path: &str, method: &str) -> bool {
    if method == "OPTIONS" {
        return true;
    }

    if path == LOGIN_PATH && method == "POST" {
        return true;
    }

    !(path == ADMIN_PREFIX || path.starts_with(&format!("{ADMIN_PREFIX}/")))
}

fn extract_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|header| {
            let parts: Vec<&str> = header.split_whitespace().collect();
            if parts.len() == 2 && parts[0].eq_ignore_ascii_case("bearer") {
                Some(parts[1].to_string())
            } else {
                None
            }
        })
}

fn get_valid_claims(req: &ServiceRequest, state: &AppState) -> Result<Claims, AuthError> {
    let token = extract_token(req).ok_or(AuthError::MissingCredentials)?;
    state.auth_handler.decode_claims(&token)
}

fn enforce_admin_access(claims: &Claims) -> Result<(), HttpResponse> {
    if !claims.admin {
        tracing::warn!(sub = %claims.sub, "Admin access required");
        return Err(json_error(StatusCode::FORBIDDEN, "Admin access required"));
    }
    Ok(())
}

fn custom_error_response(req: ServiceRequest, res: HttpResponse) -> ServiceResponse<BoxBody> {
    req.into_response(res)
}
