use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::{
        contact::{Contact, ContactTranslation},
        experience::{WorkExperience, WorkExperienceTranslation},
        project::{Project, ProjectTranslation},
        resume::Resume,
        stack::Stack,
        testimonial::{Testimonial, TestimonialTranslation},
    },
    errors::AppError,
    repositories::sqlx_repo::{
        fetch_linked_stacks, fetch_translations, group_by_owner, SqlxProfileRepo,
        PROJECT_STACKS, WORK_EXPERIENCE_STACKS,
    },
};

/// Read side of the profile store. Every list is returned in display order
/// with translations (insertion order) and stacks already attached.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn check_connection(&self) -> Result<(), AppError>;

    async fn list_work_experiences(&self) -> Result<Vec<WorkExperience>, AppError>;

    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;

    async fn list_stacks(&self) -> Result<Vec<Stack>, AppError>;

    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, AppError>;

    /// Only contacts flagged visible.
    async fn list_visible_contacts(&self) -> Result<Vec<Contact>, AppError>;

    /// Only active resumes.
    async fn list_active_resumes(&self) -> Result<Vec<Resume>, AppError>;
}

impl SqlxProfileRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProfileRepo { pool }
    }
}

#[async_trait]
impl ProfileRepository for SqlxProfileRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list_work_experiences(&self) -> Result<Vec<WorkExperience>, AppError> {
        let mut experiences = sqlx::query_as::<_, WorkExperience>(
            r#"
            SELECT id, company_name, company_url, start_date, end_date, is_current,
                   created_at, updated_at
            FROM work_experiences
            ORDER BY start_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let ids: Vec<Uuid> = experiences.iter().map(|e| e.id).collect();

        let translations = fetch_translations::<WorkExperienceTranslation>(
            &self.pool,
            r#"
            SELECT id, work_experience_id, language_code, position, description, location
            FROM work_experience_translations
            WHERE work_experience_id = ANY($1)
            ORDER BY created_at, id
            "#,
            &ids,
        )
        .await?;
        let mut translations = group_by_owner(
            translations.into_iter().map(|t| (t.work_experience_id, t)),
        );
        let mut stacks = fetch_linked_stacks(&self.pool, WORK_EXPERIENCE_STACKS, &ids).await?;

        for experience in &mut experiences {
            experience.translations = translations.remove(&experience.id).unwrap_or_default();
            experience.stacks = stacks.remove(&experience.id).unwrap_or_default();
        }

        Ok(experiences)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let mut projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, slug, link, repo_link, start_date, end_date, is_featured,
                   created_at, updated_at
            FROM projects
            ORDER BY is_featured DESC, start_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let ids: Vec<Uuid> = projects.iter().map(|p| p.id).collect();

        let translations = fetch_translations::<ProjectTranslation>(
            &self.pool,
            r#"
            SELECT id, project_id, language_code, title, description, role
            FROM project_translations
            WHERE project_id = ANY($1)
            ORDER BY created_at, id
            "#,
            &ids,
        )
        .await?;
        let mut translations = group_by_owner(translations.into_iter().map(|t| (t.project_id, t)));
        let mut stacks = fetch_linked_stacks(&self.pool, PROJECT_STACKS, &ids).await?;

        for project in &mut projects {
            project.translations = translations.remove(&project.id).unwrap_or_default();
            project.stacks = stacks.remove(&project.id).unwrap_or_default();
        }

        Ok(projects)
    }

    async fn list_stacks(&self) -> Result<Vec<Stack>, AppError> {
        let stacks = sqlx::query_as::<_, Stack>(
            r#"
            SELECT id, name, icon_url, category, proficiency, created_at, updated_at
            FROM stacks
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(stacks)
    }

    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, AppError> {
        let mut testimonials = sqlx::query_as::<_, Testimonial>(
            r#"
            SELECT id, author_name, author_url, author_avatar_url, kind, date,
                   created_at, updated_at
            FROM testimonials
            ORDER BY date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let ids: Vec<Uuid> = testimonials.iter().map(|t| t.id).collect();

        let translations = fetch_translations::<TestimonialTranslation>(
            &self.pool,
            r#"
            SELECT id, testimonial_id, language_code, author_position, content
            FROM testimonial_translations
            WHERE testimonial_id = ANY($1)
            ORDER BY created_at, id
            "#,
            &ids,
        )
        .await?;
        let mut translations = group_by_owner(
            translations.into_iter().map(|t| (t.testimonial_id, t)),
        );

        for testimonial in &mut testimonials {
            testimonial.translations = translations.remove(&testimonial.id).unwrap_or_default();
        }

        Ok(testimonials)
    }

    async fn list_visible_contacts(&self) -> Result<Vec<Contact>, AppError> {
        let mut contacts = sqlx::query_as::<_, Contact>(
            r#"
            SELECT id, type, value, icon, is_visible, sort_order, created_at, updated_at
            FROM contacts
            WHERE is_visible
            ORDER BY sort_order
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let ids: Vec<Uuid> = contacts.iter().map(|c| c.id).collect();

        let translations = fetch_translations::<ContactTranslation>(
            &self.pool,
            r#"
            SELECT id, contact_id, language_code, label
            FROM contact_translations
            WHERE contact_id = ANY($1)
            ORDER BY created_at, id
            "#,
            &ids,
        )
        .await?;
        let mut translations = group_by_owner(translations.into_iter().map(|t| (t.contact_id, t)));

        for contact in &mut contacts {
            contact.translations = translations.remove(&contact.id).unwrap_or_default();
        }

        Ok(contacts)
    }

    async fn list_active_resumes(&self) -> Result<Vec<Resume>, AppError> {
        let resumes = sqlx::query_as::<_, Resume>(
            r#"
            SELECT id, language_code, file_path, generated_at, is_active
            FROM resumes
            WHERE is_active
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(resumes)
    }
}
