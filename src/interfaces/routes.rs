use actix_web::web;

use crate::handlers::{home::home, system::health_check};

mod admin;
mod json_error;
mod profile;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home));
    cfg.route("/api/health", web::get().to(health_check));

    cfg.service(
        web::scope("/api/v1")
            .configure(profile::config_routes)
            .configure(admin::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
