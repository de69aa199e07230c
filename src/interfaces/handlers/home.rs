use actix_web::{web, HttpResponse, Responder};

use crate::AppState;

/// `GET /`
pub async fn home(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Welcome to the {}!", state.config.name),
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "profile": "/api/v1/profile/full",
        "health": "/api/health"
    }))
}
