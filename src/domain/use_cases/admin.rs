use std::sync::Arc;

use slug::slugify;
use tracing::info;
use validator::Validate;

use crate::{
    domain::validation::validate_language_code,
    entities::{
        contact::{ContactInput, ContactTranslation, ContactTranslationInput},
        experience::{WorkExperienceInput, WorkExperienceTranslation, WorkExperienceTranslationInput},
        project::{ProjectInput, ProjectTranslation, ProjectTranslationInput},
        response::MutationResponse,
        resume::ResumeInput,
        stack::StackInput,
        testimonial::{TestimonialInput, TestimonialTranslation, TestimonialTranslationInput},
    },
    errors::AppError,
    repositories::admin::AdminRepository,
    utils::parse_id::parse_id,
};

pub struct AdminHandler<R>
where
    R: AdminRepository + ?Sized,
{
    pub admin_repo: Arc<R>,
}

fn valid_language(language_code: &str) -> Result<(), AppError> {
    validate_language_code(language_code).map_err(|e| {
        AppError::InvalidInput(
            e.message
                .map(|m| m.to_string())
                .unwrap_or_else(|| "Invalid language code".to_string()),
        )
    })
}

impl<R> AdminHandler<R>
where
    R: AdminRepository + ?Sized,
{
    pub fn new(admin_repo: Arc<R>) -> Self {
        AdminHandler { admin_repo }
    }

    // ───── Stacks ─────────────────────────────────────────────────────

    pub async fn create_stack(&self, input: StackInput) -> Result<MutationResponse, AppError> {
        input.validate()?;
        let id = self.admin_repo.create_stack(&input).await?;
        info!(%id, name = %input.name, "Stack created");
        Ok(MutationResponse::new(id, "Stack created"))
    }

    pub async fn update_stack(&self, id: &str, input: StackInput) -> Result<MutationResponse, AppError> {
        let id = parse_id(id)?;
        input.validate()?;
        self.admin_repo.update_stack(id, &input).await?;
        info!(%id, "Stack updated");
        Ok(MutationResponse::new(id, "Stack updated"))
    }

    pub async fn delete_stack(&self, id: &str) -> Result<(), AppError> {
        let id = parse_id(id)?;
        self.admin_repo.delete_stack(id).await?;
        info!(%id, "Stack deleted");
        Ok(())
    }

    // ───── Work experience ────────────────────────────────────────────

    pub async fn create_work_experience(
        &self,
        input: WorkExperienceInput,
    ) -> Result<MutationResponse, AppError> {
        input.validate()?;
        let id = self.admin_repo.create_work_experience(&input).await?;
        info!(%id, company = %input.company_name, "Work experience created");
        Ok(MutationResponse::new(id, "Work experience created"))
    }

    pub async fn update_work_experience(
        &self,
        id: &str,
        input: WorkExperienceInput,
    ) -> Result<MutationResponse, AppError> {
        let id = parse_id(id)?;
        input.validate()?;
        self.admin_repo.update_work_experience(id, &input).await?;
        info!(%id, "Work experience updated");
        Ok(MutationResponse::new(id, "Work experience updated"))
    }

    pub async fn delete_work_experience(&self, id: &str) -> Result<(), AppError> {
        let id = parse_id(id)?;
        self.admin_repo.delete_work_experience(id).await?;
        info!(%id, "Work experience deleted");
        Ok(())
    }

    pub async fn upsert_work_experience_translation(
        &self,
        id: &str,
        language_code: &str,
        input: WorkExperienceTranslationInput,
    ) -> Result<WorkExperienceTranslation, AppError> {
        let id = parse_id(id)?;
        valid_language(language_code)?;
        input.validate()?;
        let translation = self.admin_repo
            .upsert_work_experience_translation(id, language_code, &input)
            .await?;
        info!(%id, language_code, "Work experience translation saved");
        Ok(translation)
    }

    pub async fn delete_work_experience_translation(&self, id: &str, language_code: &str) -> Result<(), AppError> {
        let id = parse_id(id)?;
        valid_language(language_code)?;
        self.admin_repo.delete_work_experience_translation(id, language_code).await
    }

    // ───── Projects ───────────────────────────────────────────────────

    pub async fn create_project(&self, input: ProjectInput) -> Result<MutationResponse, AppError> {
        let input = normalize_project(input)?;
        let id = self.admin_repo.create_project(&input).await?;
        info!(%id, slug = %input.slug, "Project created");
        Ok(MutationResponse::new(id, "Project created"))
    }

    pub async fn update_project(&self, id: &str, input: ProjectInput) -> Result<MutationResponse, AppError> {
        let id = parse_id(id)?;
        let input = normalize_project(input)?;
        self.admin_repo.update_project(id, &input).await?;
        info!(%id, slug = %input.slug, "Project updated");
        Ok(MutationResponse::new(id, "Project updated"))
    }

    pub async fn delete_project(&self, id: &str) -> Result<(), AppError> {
        let id = parse_id(id)?;
        self.admin_repo.delete_project(id).await?;
        info!(%id, "Project deleted");
        Ok(())
    }

    pub async fn upsert_project_translation(
        &self,
        id: &str,
        language_code: &str,
        input: ProjectTranslationInput,
    ) -> Result<ProjectTranslation, AppError> {
        let id = parse_id(id)?;
        valid_language(language_code)?;
        input.validate()?;
        let translation = self.admin_repo
            .upsert_project_translation(id, language_code, &input)
            .await?;
        info!(%id, language_code, "Project translation saved");
        Ok(translation)
    }

    pub async fn delete_project_translation(&self, id: &str, language_code: &str) -> Result<(), AppError> {
        let id = parse_id(id)?;
        valid_language(language_code)?;
        self.admin_repo.delete_project_translation(id, language_code).await
    }

    // ───── Testimonials ───────────────────────────────────────────────

    pub async fn create_testimonial(&self, input: TestimonialInput) -> Result<MutationResponse, AppError> {
        input.validate()?;
        let id = self.admin_repo.create_testimonial(&input).await?;
        info!(%id, "Testimonial created");
        Ok(MutationResponse::new(id, "Testimonial created"))
    }

    pub async fn update_testimonial(
        &self,
        id: &str,
        input: TestimonialInput,
    ) -> Result<MutationResponse, AppError> {
        let id = parse_id(id)?;
        input.validate()?;
        self.admin_repo.update_testimonial(id, &input).await?;
        info!(%id, "Testimonial updated");
        Ok(MutationResponse::new(id, "Testimonial updated"))
    }

    pub async fn delete_testimonial(&self, id: &str) -> Result<(), AppError> {
        let id = parse_id(id)?;
        self.admin_repo.delete_testimonial(id).await?;
        info!(%id, "Testimonial deleted");
        Ok(())
    }

    pub async fn upsert_testimonial_translation(
        &self,
        id: &str,
        language_code: &str,
        input: TestimonialTranslationInput,
    ) -> Result<TestimonialTranslation, AppError> {
        let id = parse_id(id)?;
        valid_language(language_code)?;
        input.validate()?;
        let translation = self.admin_repo
            .upsert_testimonial_translation(id, language_code, &input)
            .await?;
        info!(%id, language_code, "Testimonial translation saved");
        Ok(translation)
    }

    pub async fn delete_testimonial_translation(&self, id: &str, language_code: &str) -> Result<(), AppError> {
        let id = parse_id(id)?;
        valid_language(language_code)?;
        self.admin_repo.delete_testimonial_translation(id, language_code).await
    }

    // ───── Contacts ───────────────────────────────────────────────────

    pub async fn create_contact(&self, input: ContactInput) -> Result<MutationResponse, AppError> {
        input.validate()?;
        let id = self.admin_repo.create_contact(&input).await?;
        info!(%id, contact_type = %input.contact_type, "Contact created");
        Ok(MutationResponse::new(id, "Contact created"))
    }

    pub async fn update_contact(&self, id: &str, input: ContactInput) -> Result<MutationResponse, AppError> {
        let id = parse_id(id)?;
        input.validate()?;
        self.admin_repo.update_contact(id, &input).await?;
        info!(%id, "Contact updated");
        Ok(MutationResponse::new(id, "Contact updated"))
    }

    pub async fn delete_contact(&self, id: &str) -> Result<(), AppError> {
        let id = parse_id(id)?;
        self.admin_repo.delete_contact(id).await?;
        info!(%id, "Contact deleted");
        Ok(())
    }

    pub async fn upsert_contact_translation(
        &self,
        id: &str,
        language_code: &str,
        input: ContactTranslationInput,
    ) -> Result<ContactTranslation, AppError> {
        let id = parse_id(id)?;
        valid_language(language_code)?;
        input.validate()?;
        let translation = self.admin_repo
            .upsert_contact_translation(id, language_code, &input)
            .await?;
        info!(%id, language_code, "Contact translation saved");
        Ok(translation)
    }

    pub async fn delete_contact_translation(&self, id: &str, language_code: &str) -> Result<(), AppError> {
        let id = parse_id(id)?;
        valid_language(language_code)?;
        self.admin_repo.delete_contact_translation(id, language_code).await
    }

    // ───── Resumes ────────────────────────────────────────────────────

    pub async fn create_resume(&self, input: ResumeInput) -> Result<MutationResponse, AppError> {
        input.validate()?;
        let id = self.admin_repo.create_resume(&input).await?;
        info!(%id, language_code = %input.language_code, "Resume created");
        Ok(MutationResponse::new(id, "Resume created"))
    }

    pub async fn update_resume(&self, id: &str, input: ResumeInput) -> Result<MutationResponse, AppError> {
        let id = parse_id(id)?;
        input.validate()?;
        self.admin_repo.update_resume(id, &input).await?;
        info!(%id, "Resume updated");
        Ok(MutationResponse::new(id, "Resume updated"))
    }

    pub async fn delete_resume(&self, id: &str) -> Result<(), AppError> {
        let id = parse_id(id)?;
        self.admin_repo.delete_resume(id).await?;
        info!(%id, "Resume deleted");
        Ok(())
    }
}

/// Validates the input and replaces its slug with the slugified form.
fn normalize_project(mut input: ProjectInput) -> Result<ProjectInput, AppError> {
    input.validate()?;
    input.slug = slugify(&input.slug);
    if input.slug.is_empty() {
        return Err(AppError::InvalidInput("Slug must contain letters or digits".to_string()));
    }
    Ok(input)
}
