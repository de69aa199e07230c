use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::{
        contact::{ContactInput, ContactTranslationInput},
        experience::{WorkExperienceInput, WorkExperienceTranslationInput},
        project::{ProjectInput, ProjectTranslationInput},
        resume::ResumeInput,
        stack::StackInput,
        testimonial::{TestimonialInput, TestimonialTranslationInput},
    },
    errors::AppError,
    use_cases::extractors::AdminClaims,
    AppState,
};

// ───── Stacks ─────────────────────────────────────────────────────────

#[instrument(skip(_claims, state, data))]
pub async fn create_stack(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<StackInput>,
) -> Result<impl Responder, AppError> {
    let response = state.admin_handler.create_stack(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(_claims, state, data))]
pub async fn update_stack(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<String>,
    data: web::Json<StackInput>,
) -> Result<impl Responder, AppError> {
    let response = state.admin_handler.update_stack(&id, data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(_claims, state))]
pub async fn delete_stack(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    state.admin_handler.delete_stack(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

// ───── Work experience ────────────────────────────────────────────────

#[instrument(skip(_claims, state, data))]
pub async fn create_experience(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<WorkExperienceInput>,
) -> Result<impl Responder, AppError> {
    let response = state.admin_handler.create_work_experience(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(_claims, state, data))]
pub async fn update_experience(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<String>,
    data: web::Json<WorkExperienceInput>,
) -> Result<impl Responder, AppError> {
    let response = state.admin_handler.update_work_experience(&id, data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(_claims, state))]
pub async fn delete_experience(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    state.admin_handler.delete_work_experience(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[instrument(skip(_claims, state, data))]
pub async fn upsert_experience_translation(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    data: web::Json<WorkExperienceTranslationInput>,
) -> Result<impl Responder, AppError> {
    let (id, lang) = path.into_inner();
    let translation = state.admin_handler
        .upsert_work_experience_translation(&id, &lang, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(translation))
}

#[instrument(skip(_claims, state))]
pub async fn delete_experience_translation(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<impl Responder, AppError> {
    let (id, lang) = path.into_inner();
    state.admin_handler.delete_work_experience_translation(&id, &lang).await?;
    Ok(HttpResponse::NoContent().finish())
}

// ───── Projects ───────────────────────────────────────────────────────

#[instrument(skip(_claims, state, data))]
pub async fn create_project(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<ProjectInput>,
) -> Result<impl Responder, AppError> {
    let response = state.admin_handler.create_project(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(_claims, state, data))]
pub async fn update_project(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<String>,
    data: web::Json<ProjectInput>,
) -> Result<impl Responder, AppError> {
    let response = state.admin_handler.update_project(&id, data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(_claims, state))]
pub async fn delete_project(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    state.admin_handler.delete_project(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[instrument(skip(_claims, state, data))]
pub async fn upsert_project_translation(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    data: web::Json<ProjectTranslationInput>,
) -> Result<impl Responder, AppError> {
    let (id, lang) = path.into_inner();
    let translation = state.admin_handler
        .upsert_project_translation(&id, &lang, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(translation))
}

#[instrument(skip(_claims, state))]
pub async fn delete_project_translation(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<impl Responder, AppError> {
    let (id, lang) = path.into_inner();
    state.admin_handler.delete_project_translation(&id, &lang).await?;
    Ok(HttpResponse::NoContent().finish())
}

// ───── Testimonials ───────────────────────────────────────────────────

#[instrument(skip(_claims, state, data))]
pub async fn create_testimonial(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<TestimonialInput>,
) -> Result<impl Responder, AppError> {
    let response = state.admin_handler.create_testimonial(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(_claims, state, data))]
pub async fn update_testimonial(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<String>,
    data: web::Json<TestimonialInput>,
) -> Result<impl Responder, AppError> {
    let response = state.admin_handler.update_testimonial(&id, data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(_claims, state))]
pub async fn delete_testimonial(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    state.admin_handler.delete_testimonial(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[instrument(skip(_claims, state, data))]
pub async fn upsert_testimonial_translation(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    data: web::Json<TestimonialTranslationInput>,
) -> Result<impl Responder, AppError> {
    let (id, lang) = path.into_inner();
    let translation = state.admin_handler
        .upsert_testimonial_translation(&id, &lang, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(translation))
}

#[instrument(skip(_claims, state))]
pub async fn delete_testimonial_translation(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<impl Responder, AppError> {
    let (id, lang) = path.into_inner();
    state.admin_handler.delete_testimonial_translation(&id, &lang).await?;
    Ok(HttpResponse::NoContent().finish())
}

// ───── Contacts ───────────────────────────────────────────────────────

#[instrument(skip(_claims, state, data))]
pub async fn create_contact(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<ContactInput>,
) -> Result<impl Responder, AppError> {
    let response = state.admin_handler.create_contact(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(_claims, state, data))]
pub async fn update_contact(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<String>,
    data: web::Json<ContactInput>,
) -> Result<impl Responder, AppError> {
    let response = state.admin_handler.update_contact(&id, data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(_claims, state))]
pub async fn delete_contact(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    state.admin_handler.delete_contact(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[instrument(skip(_claims, state, data))]
pub async fn upsert_contact_translation(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    data: web::Json<ContactTranslationInput>,
) -> Result<impl Responder, AppError> {
    let (id, lang) = path.into_inner();
    let translation = state.admin_handler
        .upsert_contact_translation(&id, &lang, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(translation))
}

#[instrument(skip(_claims, state))]
pub async fn delete_contact_translation(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<impl Responder, AppError> {
    let (id, lang) = path.into_inner();
    state.admin_handler.delete_contact_translation(&id, &lang).await?;
    Ok(HttpResponse::NoContent().finish())
}

// ───── Resumes ────────────────────────────────────────────────────────

#[instrument(skip(_claims, state, data))]
pub async fn create_resume(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<ResumeInput>,
) -> Result<impl Responder, AppError> {
    let response = state.admin_handler.create_resume(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(_claims, state, data))]
pub async fn update_resume(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<String>,
    data: web::Json<ResumeInput>,
) -> Result<impl Responder, AppError> {
    let response = state.admin_handler.update_resume(&id, data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(_claims, state))]
pub async fn delete_resume(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    state.admin_handler.delete_resume(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
