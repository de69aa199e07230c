use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::{
        contact::{ContactInput, ContactTranslation, ContactTranslationInput},
        experience::{WorkExperienceInput, WorkExperienceTranslation, WorkExperienceTranslationInput},
        project::{ProjectInput, ProjectTranslation, ProjectTranslationInput},
        resume::ResumeInput,
        stack::StackInput,
        testimonial::{TestimonialInput, TestimonialTranslation, TestimonialTranslationInput},
    },
    errors::AppError,
    repositories::sqlx_repo::{
        is_foreign_key_violation, is_unique_violation, replace_stacks, SqlxAdminRepo,
        PROJECT_STACKS, WORK_EXPERIENCE_STACKS,
    },
};

/// Write side of the profile store, used by the admin API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn create_stack(&self, input: &StackInput) -> Result<Uuid, AppError>;
    async fn update_stack(&self, id: Uuid, input: &StackInput) -> Result<(), AppError>;
    async fn delete_stack(&self, id: Uuid) -> Result<(), AppError>;

    /// Inserts the experience and attaches `stack_ids` in one transaction.
    async fn create_work_experience(&self, input: &WorkExperienceInput) -> Result<Uuid, AppError>;
    async fn update_work_experience(&self, id: Uuid, input: &WorkExperienceInput) -> Result<(), AppError>;
    async fn delete_work_experience(&self, id: Uuid) -> Result<(), AppError>;
    async fn upsert_work_experience_translation(
        &self,
        id: Uuid,
        language_code: &str,
        input: &WorkExperienceTranslationInput,
    ) -> Result<WorkExperienceTranslation, AppError>;
    async fn delete_work_experience_translation(&self, id: Uuid, language_code: &str) -> Result<(), AppError>;

    async fn create_project(&self, input: &ProjectInput) -> Result<Uuid, AppError>;
    async fn update_project(&self, id: Uuid, input: &ProjectInput) -> Result<(), AppError>;
    async fn delete_project(&self, id: Uuid) -> Result<(), AppError>;
    async fn upsert_project_translation(
        &self,
        id: Uuid,
        language_code: &str,
        input: &ProjectTranslationInput,
    ) -> Result<ProjectTranslation, AppError>;
    async fn delete_project_translation(&self, id: Uuid, language_code: &str) -> Result<(), AppError>;

    async fn create_testimonial(&self, input: &TestimonialInput) -> Result<Uuid, AppError>;
    async fn update_testimonial(&self, id: Uuid, input: &TestimonialInput) -> Result<(), AppError>;
    async fn delete_testimonial(&self, id: Uuid) -> Result<(), AppError>;
    async fn upsert_testimonial_translation(
        &self,
        id: Uuid,
        language_code: &str,
        input: &TestimonialTranslationInput,
    ) -> Result<TestimonialTranslation, AppError>;
    async fn delete_testimonial_translation(&self, id: Uuid, language_code: &str) -> Result<(), AppError>;

    async fn create_contact(&self, input: &ContactInput) -> Result<Uuid, AppError>;
    async fn update_contact(&self, id: Uuid, input: &ContactInput) -> Result<(), AppError>;
    async fn delete_contact(&self, id: Uuid) -> Result<(), AppError>;
    async fn upsert_contact_translation(
        &self,
        id: Uuid,
        language_code: &str,
        input: &ContactTranslationInput,
    ) -> Result<ContactTranslation, AppError>;
    async fn delete_contact_translation(&self, id: Uuid, language_code: &str) -> Result<(), AppError>;

    async fn create_resume(&self, input: &ResumeInput) -> Result<Uuid, AppError>;
    async fn update_resume(&self, id: Uuid, input: &ResumeInput) -> Result<(), AppError>;
    async fn delete_resume(&self, id: Uuid) -> Result<(), AppError>;
}

impl SqlxAdminRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxAdminRepo { pool }
    }

    async fn delete_by_id(&self, table: &str, id: Uuid, entity: &str) -> Result<(), AppError> {
        let sql = format!("DELETE FROM {table} WHERE id = $1");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("{entity} {id}")));
        }
        Ok(())
    }

    async fn delete_translation(
        &self,
        table: &str,
        owner_column: &str,
        id: Uuid,
        language_code: &str,
    ) -> Result<(), AppError> {
        let sql = format!("DELETE FROM {table} WHERE {owner_column} = $1 AND language_code = $2");
        let result = sqlx::query(&sql)
            .bind(id)
            .bind(language_code)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Translation '{language_code}' for {id}")));
        }
        Ok(())
    }
}

/// Maps constraint violations raised while writing a base row.
fn write_error(err: sqlx::Error, unique_message: &str) -> AppError {
    if is_unique_violation(&err) {
        AppError::Conflict(unique_message.to_string())
    } else if is_foreign_key_violation(&err) {
        AppError::Conflict("One or more stack ids do not exist".to_string())
    } else {
        err.into()
    }
}

/// A translation upsert can only violate the owner foreign key.
fn translation_error(err: sqlx::Error, entity: &str, id: Uuid) -> AppError {
    if is_foreign_key_violation(&err) {
        AppError::NotFound(format!("{entity} {id}"))
    } else {
        err.into()
    }
}

#[async_trait]
impl AdminRepository for SqlxAdminRepo {
    async fn create_stack(&self, input: &StackInput) -> Result<Uuid, AppError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO stacks (name, icon_url, category, proficiency)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&input.name)
        .bind(&input.icon_url)
        .bind(&input.category)
        .bind(input.proficiency)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, "A stack with this name already exists"))?;

        Ok(id)
    }

    async fn update_stack(&self, id: Uuid, input: &StackInput) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE stacks
            SET name = $1, icon_url = $2, category = $3, proficiency = $4, updated_at = NOW()
            WHERE id = $5
            "#,
        )
        .bind(&input.name)
        .bind(&input.icon_url)
        .bind(&input.category)
        .bind(input.proficiency)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, "A stack with this name already exists"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Stack {id}")));
        }
        Ok(())
    }

    async fn delete_stack(&self, id: Uuid) -> Result<(), AppError> {
        self.delete_by_id("stacks", id, "Stack").await
    }

    async fn create_work_experience(&self, input: &WorkExperienceInput) -> Result<Uuid, AppError> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO work_experiences (company_name, company_url, start_date, end_date, is_current)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&input.company_name)
        .bind(&input.company_url)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.is_current)
        .fetch_one(&mut *tx)
        .await?;

        replace_stacks(&mut tx, WORK_EXPERIENCE_STACKS, id, &input.stack_ids)
            .await
            .map_err(|e| write_error(e, "Duplicate stack association"))?;

        tx.commit().await?;
        Ok(id)
    }

    async fn update_work_experience(&self, id: Uuid, input: &WorkExperienceInput) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE work_experiences
            SET company_name = $1, company_url = $2, start_date = $3, end_date = $4,
                is_current = $5, updated_at = NOW()
            WHERE id = $6
            "#,
        )
        .bind(&input.company_name)
        .bind(&input.company_url)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.is_current)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Work experience {id}")));
        }

        replace_stacks(&mut tx, WORK_EXPERIENCE_STACKS, id, &input.stack_ids)
            .await
            .map_err(|e| write_error(e, "Duplicate stack association"))?;

        tx.commit().await?;
        Ok(())
    }

    async fn delete_work_experience(&self, id: Uuid) -> Result<(), AppError> {
        self.delete_by_id("work_experiences", id, "Work experience").await
    }

    async fn upsert_work_experience_translation(
        &self,
        id: Uuid,
        language_code: &str,
        input: &WorkExperienceTranslationInput,
    ) -> Result<WorkExperienceTranslation, AppError> {
        sqlx::query_as::<_, WorkExperienceTranslation>(
            r#"
            INSERT INTO work_experience_translations
                (work_experience_id, language_code, position, description, location)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (work_experience_id, language_code) DO UPDATE
            SET position = EXCLUDED.position,
                description = EXCLUDED.description,
                location = EXCLUDED.location
            RETURNING id, work_experience_id, language_code, position, description, location
            "#,
        )
        .bind(id)
        .bind(language_code)
        .bind(&input.position)
        .bind(&input.description)
        .bind(&input.location)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| translation_error(e, "Work experience", id))
    }

    async fn delete_work_experience_translation(&self, id: Uuid, language_code: &str) -> Result<(), AppError> {
        self.delete_translation("work_experience_translations", "work_experience_id", id, language_code)
            .await
    }

    async fn create_project(&self, input: &ProjectInput) -> Result<Uuid, AppError> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO projects (slug, link, repo_link, start_date, end_date, is_featured)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&input.slug)
        .bind(&input.link)
        .bind(&input.repo_link)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.is_featured)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| write_error(e, "A project with this slug already exists"))?;

        replace_stacks(&mut tx, PROJECT_STACKS, id, &input.stack_ids)
            .await
            .map_err(|e| write_error(e, "Duplicate stack association"))?;

        tx.commit().await?;
        Ok(id)
    }

    async fn update_project(&self, id: Uuid, input: &ProjectInput) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE projects
            SET slug = $1, link = $2, repo_link = $3, start_date = $4, end_date = $5,
                is_featured = $6, updated_at = NOW()
            WHERE id = $7
            "#,
        )
        .bind(&input.slug)
        .bind(&input.link)
        .bind(&input.repo_link)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.is_featured)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| write_error(e, "A project with this slug already exists"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Project {id}")));
        }

        replace_stacks(&mut tx, PROJECT_STACKS, id, &input.stack_ids)
            .await
            .map_err(|e| write_error(e, "Duplicate stack association"))?;

        tx.commit().await?;
        Ok(())
    }

    async fn delete_project(&self, id: Uuid) -> Result<(), AppError> {
        self.delete_by_id("projects", id, "Project").await
    }

    async fn upsert_project_translation(
        &self,
        id: Uuid,
        language_code: &str,
        input: &ProjectTranslationInput,
    ) -> Result<ProjectTranslation, AppError> {
        sqlx::query_as::<_, ProjectTranslation>(
            r#"
            INSERT INTO project_translations (project_id, language_code, title, description, role)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (project_id, language_code) DO UPDATE
            SET title = EXCLUDED.title,
                description = EXCLUDED.description,
                role = EXCLUDED.role
            RETURNING id, project_id, language_code, title, description, role
            "#,
        )
        .bind(id)
        .bind(language_code)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| translation_error(e, "Project", id))
    }

    async fn delete_project_translation(&self, id: Uuid, language_code: &str) -> Result<(), AppError> {
        self.delete_translation("project_translations", "project_id", id, language_code)
            .await
    }

    async fn create_testimonial(&self, input: &TestimonialInput) -> Result<Uuid, AppError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO testimonials (author_name, author_url, author_avatar_url, kind, date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&input.author_name)
        .bind(&input.author_url)
        .bind(&input.author_avatar_url)
        .bind(&input.kind)
        .bind(input.date)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update_testimonial(&self, id: Uuid, input: &TestimonialInput) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE testimonials
            SET author_name = $1, author_url = $2, author_avatar_url = $3, kind = $4,
                date = $5, updated_at = NOW()
            WHERE id = $6
            "#,
        )
        .bind(&input.author_name)
        .bind(&input.author_url)
        .bind(&input.author_avatar_url)
        .bind(&input.kind)
        .bind(input.date)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Testimonial {id}")));
        }
        Ok(())
    }

    async fn delete_testimonial(&self, id: Uuid) -> Result<(), AppError> {
        self.delete_by_id("testimonials", id, "Testimonial").await
    }

    async fn upsert_testimonial_translation(
        &self,
        id: Uuid,
        language_code: &str,
        input: &TestimonialTranslationInput,
    ) -> Result<TestimonialTranslation, AppError> {
        sqlx::query_as::<_, TestimonialTranslation>(
            r#"
            INSERT INTO testimonial_translations (testimonial_id, language_code, author_position, content)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (testimonial_id, language_code) DO UPDATE
            SET author_position = EXCLUDED.author_position,
                content = EXCLUDED.content
            RETURNING id, testimonial_id, language_code, author_position, content
            "#,
        )
        .bind(id)
        .bind(language_code)
        .bind(&input.author_position)
        .bind(&input.content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| translation_error(e, "Testimonial", id))
    }

    async fn delete_testimonial_translation(&self, id: Uuid, language_code: &str) -> Result<(), AppError> {
        self.delete_translation("testimonial_translations", "testimonial_id", id, language_code)
            .await
    }

    async fn create_contact(&self, input: &ContactInput) -> Result<Uuid, AppError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO contacts (type, value, icon, is_visible, sort_order)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&input.contact_type)
        .bind(&input.value)
        .bind(&input.icon)
        .bind(input.is_visible)
        .bind(input.sort_order)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update_contact(&self, id: Uuid, input: &ContactInput) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE contacts
            SET type = $1, value = $2, icon = $3, is_visible = $4, sort_order = $5,
                updated_at = NOW()
            WHERE id = $6
            "#,
        )
        .bind(&input.contact_type)
        .bind(&input.value)
        .bind(&input.icon)
        .bind(input.is_visible)
        .bind(input.sort_order)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Contact {id}")));
        }
        Ok(())
    }

    async fn delete_contact(&self, id: Uuid) -> Result<(), AppError> {
        self.delete_by_id("contacts", id, "Contact").await
    }

    async fn upsert_contact_translation(
        &self,
        id: Uuid,
        language_code: &str,
        input: &ContactTranslationInput,
    ) -> Result<ContactTranslation, AppError> {
        sqlx::query_as::<_, ContactTranslation>(
            r#"
            INSERT INTO contact_translations (contact_id, language_code, label)
            VALUES ($1, $2, $3)
            ON CONFLICT (contact_id, language_code) DO UPDATE
            SET label = EXCLUDED.label
            RETURNING id, contact_id, language_code, label
            "#,
        )
        .bind(id)
        .bind(language_code)
        .bind(&input.label)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| translation_error(e, "Contact", id))
    }

    async fn delete_contact_translation(&self, id: Uuid, language_code: &str) -> Result<(), AppError> {
        self.delete_translation("contact_translations", "contact_id", id, language_code)
            .await
    }

    async fn create_resume(&self, input: &ResumeInput) -> Result<Uuid, AppError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO resumes (language_code, file_path, generated_at, is_active)
            VALUES ($1, $2, COALESCE($3, NOW()), $4)
            RETURNING id
            "#,
        )
        .bind(&input.language_code)
        .bind(&input.file_path)
        .bind(input.generated_at)
        .bind(input.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update_resume(&self, id: Uuid, input: &ResumeInput) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE resumes
            SET language_code = $1, file_path = $2, generated_at = COALESCE($3, NOW()),
                is_active = $4
            WHERE id = $5
            "#,
        )
        .bind(&input.language_code)
        .bind(&input.file_path)
        .bind(input.generated_at)
        .bind(input.is_active)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Resume {id}")));
        }
        Ok(())
    }

    async fn delete_resume(&self, id: Uuid) -> Result<(), AppError> {
        self.delete_by_id("resumes", id, "Resume").await
    }
}
