use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::domain::localization::Translation;
use crate::domain::validation::{validate_date_range, validate_not_blank};
use crate::entities::{stack::Stack, timestamps::Timestamps};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    pub slug: String,
    pub link: Option<String>,
    pub repo_link: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_featured: bool,
    #[serde(skip)]
    #[sqlx(flatten)]
    pub timestamps: Timestamps,
    #[sqlx(skip)]
    pub translations: Vec<ProjectTranslation>,
    #[sqlx(skip)]
    pub stacks: Vec<Stack>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProjectTranslation {
    #[serde(skip_serializing)]
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub project_id: Uuid,
    pub language_code: String,
    pub title: String,
    pub description: String,
    pub role: Option<String>,
}

impl Translation for ProjectTranslation {
    fn language_code(&self) -> &str {
        &self.language_code
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LocalizedProject {
    pub id: Uuid,
    pub slug: String,
    pub link: Option<String>,
    pub repo_link: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_featured: bool,
    pub title: String,
    pub description: String,
    pub role: Option<String>,
    pub stacks: Vec<Stack>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_project_dates"))]
pub struct ProjectInput {
    /// Normalized with `slug::slugify` before storage.
    #[validate(
        length(min = 1, max = 120, message = "Slug must be between 1 and 120 characters"),
        custom(function = "validate_not_blank")
    )]
    pub slug: String,

    #[validate(url(message = "Link must be a valid URL"))]
    pub link: Option<String>,

    #[validate(url(message = "Repository link must be a valid URL"))]
    pub repo_link: Option<String>,

    pub start_date: NaiveDate,

    pub end_date: Option<NaiveDate>,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default)]
    pub stack_ids: Vec<Uuid>,
}

fn validate_project_dates(input: &ProjectInput) -> Result<(), ValidationError> {
    validate_date_range(input.start_date, input.end_date)
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProjectTranslationInput {
    #[validate(
        length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"),
        custom(function = "validate_not_blank")
    )]
    pub title: String,

    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: String,

    #[validate(length(max = 200, message = "Role is too long"))]
    pub role: Option<String>,
}
