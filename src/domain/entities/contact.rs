use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::localization::Translation;
use crate::domain::validation::validate_not_blank;
use crate::entities::timestamps::Timestamps;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Contact {
    pub id: Uuid,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub contact_type: String,
    pub value: String,
    pub icon: Option<String>,
    pub is_visible: bool,
    pub sort_order: i32,
    #[serde(skip)]
    #[sqlx(flatten)]
    pub timestamps: Timestamps,
    #[sqlx(skip)]
    pub translations: Vec<ContactTranslation>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ContactTranslation {
    #[serde(skip_serializing)]
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub contact_id: Uuid,
    pub language_code: String,
    pub label: Option<String>,
}

impl Translation for ContactTranslation {
    fn language_code(&self) -> &str {
        &self.language_code
    }
}

/// Visible contact as served for one language; visibility is implied.
#[derive(Debug, Clone, Serialize)]
pub struct LocalizedContact {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub contact_type: String,
    pub value: String,
    pub icon: Option<String>,
    pub sort_order: i32,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactInput {
    #[serde(rename = "type")]
    #[validate(
        length(min = 1, max = 50, message = "Type must be between 1 and 50 characters"),
        custom(function = "validate_not_blank")
    )]
    pub contact_type: String,

    #[validate(
        length(min = 1, max = 500, message = "Value must be between 1 and 500 characters"),
        custom(function = "validate_not_blank")
    )]
    pub value: String,

    #[validate(length(max = 200, message = "Icon is too long"))]
    pub icon: Option<String>,

    #[serde(default = "default_visible")]
    pub is_visible: bool,

    #[serde(default)]
    pub sort_order: i32,
}

fn default_visible() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactTranslationInput {
    #[validate(length(max = 200, message = "Label is too long"))]
    pub label: Option<String>,
}
