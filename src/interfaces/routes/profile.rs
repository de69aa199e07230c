use actix_web::web;

use crate::handlers::profile;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/profile")
            .route("/full", web::get().to(profile::get_full_profile))
            .route("/experience", web::get().to(profile::list_experience))
            .route("/projects", web::get().to(profile::list_projects))
            .route("/stacks", web::get().to(profile::list_stacks))
            .route("/testimonials", web::get().to(profile::list_testimonials))
            .route("/contacts", web::get().to(profile::list_contacts))
            .route("/resume", web::get().to(profile::list_resumes))
    );
}
