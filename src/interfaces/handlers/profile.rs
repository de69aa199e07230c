use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::profile::ProfileQuery, errors::AppError, AppState};

/// `GET /profile/full?lang=`: the whole profile resolved for one language.
#[instrument(skip(state))]
pub async fn get_full_profile(
    state: web::Data<AppState>,
    query: web::Query<ProfileQuery>,
) -> Result<impl Responder, AppError> {
    let snapshot = state.profile_handler
        .get_full_profile(&query.lang)
        .await?;

    Ok(HttpResponse::Ok().json(snapshot))
}

#[instrument(skip(state))]
pub async fn list_experience(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let experiences = state.profile_handler.list_experience().await?;
    Ok(HttpResponse::Ok().json(experiences))
}

#[instrument(skip(state))]
pub async fn list_projects(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let projects = state.profile_handler.list_projects().await?;
    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state))]
pub async fn list_stacks(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let stacks = state.profile_handler.list_stacks().await?;
    Ok(HttpResponse::Ok().json(stacks))
}

#[instrument(skip(state))]
pub async fn list_testimonials(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let testimonials = state.profile_handler.list_testimonials().await?;
    Ok(HttpResponse::Ok().json(testimonials))
}

#[instrument(skip(state))]
pub async fn list_contacts(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let contacts = state.profile_handler.list_contacts().await?;
    Ok(HttpResponse::Ok().json(contacts))
}

#[instrument(skip(state))]
pub async fn list_resumes(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let resumes = state.profile_handler.list_resumes().await?;
    Ok(HttpResponse::Ok().json(resumes))
}
