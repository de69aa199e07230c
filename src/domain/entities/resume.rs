use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::validation::{validate_language_code, validate_not_blank};

/// Generated resume file, one row per language.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Resume {
    pub id: Uuid,
    pub language_code: String,
    pub file_path: String,
    pub generated_at: DateTime<Utc>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResumeInput {
    #[validate(custom(function = "validate_language_code"))]
    pub language_code: String,

    #[validate(
        length(min = 1, max = 500, message = "File path must be between 1 and 500 characters"),
        custom(function = "validate_not_blank")
    )]
    pub file_path: String,

    /// Defaults to the time of the write.
    pub generated_at: Option<DateTime<Utc>>,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}
