use actix_web::{web, HttpRequest, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::token::LoginRequest,
    errors::AuthError,
    utils::get_client_ip::get_client_ip,
    AppState,
};

#[instrument(skip(state, req, body))]
pub async fn login(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<LoginRequest>,
) -> Result<impl Responder, AuthError> {
    let client_ip = get_client_ip(&req, state.config.trust_x_forwarded_for);

    let response = state.auth_handler
        .login(body.into_inner(), &client_ip)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
