use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::domain::localization::Translation;
use crate::domain::validation::{validate_date_range, validate_not_blank};
use crate::entities::{stack::Stack, timestamps::Timestamps};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct WorkExperience {
    pub id: Uuid,
    pub company_name: String,
    pub company_url: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    #[serde(skip)]
    #[sqlx(flatten)]
    pub timestamps: Timestamps,
    #[sqlx(skip)]
    pub translations: Vec<WorkExperienceTranslation>,
    #[sqlx(skip)]
    pub stacks: Vec<Stack>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct WorkExperienceTranslation {
    #[serde(skip_serializing)]
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub work_experience_id: Uuid,
    pub language_code: String,
    pub position: String,
    pub description: String,
    pub location: Option<String>,
}

impl Translation for WorkExperienceTranslation {
    fn language_code(&self) -> &str {
        &self.language_code
    }
}

/// Experience entry as served for one language.
#[derive(Debug, Clone, Serialize)]
pub struct LocalizedWorkExperience {
    pub id: Uuid,
    pub company_name: String,
    pub company_url: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub position: String,
    pub description: String,
    pub location: Option<String>,
    pub stacks: Vec<Stack>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_experience_dates"))]
pub struct WorkExperienceInput {
    #[validate(
        length(min = 1, max = 200, message = "Company name must be between 1 and 200 characters"),
        custom(function = "validate_not_blank")
    )]
    pub company_name: String,

    #[validate(url(message = "Company URL must be a valid URL"))]
    pub company_url: Option<String>,

    pub start_date: NaiveDate,

    pub end_date: Option<NaiveDate>,

    #[serde(default)]
    pub is_current: bool,

    #[serde(default)]
    pub stack_ids: Vec<Uuid>,
}

fn validate_experience_dates(input: &WorkExperienceInput) -> Result<(), ValidationError> {
    validate_date_range(input.start_date, input.end_date)
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WorkExperienceTranslationInput {
    #[validate(
        length(min = 1, max = 200, message = "Position must be between 1 and 200 characters"),
        custom(function = "validate_not_blank")
    )]
    pub position: String,

    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: String,

    #[validate(length(max = 200, message = "Location is too long"))]
    pub location: Option<String>,
}
