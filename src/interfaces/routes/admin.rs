use actix_web::web;

use crate::handlers::{admin, auth};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/login", web::post().to(auth::login))
            .service(
                web::resource("/stacks")
                    .route(web::post().to(admin::create_stack))
            )
            .service(
                web::resource("/stacks/{id}")
                    .route(web::put().to(admin::update_stack))
                    .route(web::delete().to(admin::delete_stack))
            )
            .service(
                web::resource("/experience")
                    .route(web::post().to(admin::create_experience))
            )
            .service(
                web::resource("/experience/{id}")
                    .route(web::put().to(admin::update_experience))
                    .route(web::delete().to(admin::delete_experience))
            )
            .service(
                web::resource("/experience/{id}/translations/{lang}")
                    .route(web::put().to(admin::upsert_experience_translation))
                    .route(web::delete().to(admin::delete_experience_translation))
            )
            .service(
                web::resource("/projects")
                    .route(web::post().to(admin::create_project))
            )
            .service(
                web::resource("/projects/{id}")
                    .route(web::put().to(admin::update_project))
                    .route(web::delete().to(admin::delete_project))
            )
            .service(
                web::resource("/projects/{id}/translations/{lang}")
                    .route(web::put().to(admin::upsert_project_translation))
                    .route(web::delete().to(admin::delete_project_translation))
            )
            .service(
                web::resource("/testimonials")
                    .route(web::post().to(admin::create_testimonial))
            )
            .service(
                web::resource("/testimonials/{id}")
                    .route(web::put().to(admin::update_testimonial))
                    .route(web::delete().to(admin::delete_testimonial))
            )
            .service(
                web::resource("/testimonials/{id}/translations/{lang}")
                    .route(web::put().to(admin::upsert_testimonial_translation))
                    .route(web::delete().to(admin::delete_testimonial_translation))
            )
            .service(
                web::resource("/contacts")
                    .route(web::post().to(admin::create_contact))
            )
            .service(
                web::resource("/contacts/{id}")
                    .route(web::put().to(admin::update_contact))
                    .route(web::delete().to(admin::delete_contact))
            )
            .service(
                web::resource("/contacts/{id}/translations/{lang}")
                    .route(web::put().to(admin::upsert_contact_translation))
                    .route(web::delete().to(admin::delete_contact_translation))
            )
            .service(
                web::resource("/resumes")
                    .route(web::post().to(admin::create_resume))
            )
            .service(
                web::resource("/resumes/{id}")
                    .route(web::put().to(admin::update_resume))
                    .route(web::delete().to(admin::delete_resume))
            )
    );
}
