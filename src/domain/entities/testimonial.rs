use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::localization::Translation;
use crate::domain::validation::validate_not_blank;
use crate::entities::timestamps::Timestamps;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Testimonial {
    pub id: Uuid,
    pub author_name: String,
    pub author_url: Option<String>,
    pub author_avatar_url: Option<String>,
    pub kind: Option<String>,
    pub date: NaiveDate,
    #[serde(skip)]
    #[sqlx(flatten)]
    pub timestamps: Timestamps,
    #[sqlx(skip)]
    pub translations: Vec<TestimonialTranslation>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TestimonialTranslation {
    #[serde(skip_serializing)]
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub testimonial_id: Uuid,
    pub language_code: String,
    pub author_position: Option<String>,
    pub content: String,
}

impl Translation for TestimonialTranslation {
    fn language_code(&self) -> &str {
        &self.language_code
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LocalizedTestimonial {
    pub id: Uuid,
    pub author_name: String,
    pub author_url: Option<String>,
    pub author_avatar_url: Option<String>,
    pub kind: Option<String>,
    pub date: NaiveDate,
    pub author_position: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TestimonialInput {
    #[validate(
        length(min = 1, max = 200, message = "Author name must be between 1 and 200 characters"),
        custom(function = "validate_not_blank")
    )]
    pub author_name: String,

    #[validate(url(message = "Author URL must be a valid URL"))]
    pub author_url: Option<String>,

    #[validate(length(max = 2048, message = "Avatar URL is too long"))]
    pub author_avatar_url: Option<String>,

    #[validate(length(max = 50, message = "Kind is too long"))]
    pub kind: Option<String>,

    pub date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TestimonialTranslationInput {
    #[validate(length(max = 200, message = "Author position is too long"))]
    pub author_position: Option<String>,

    #[validate(
        length(min = 1, message = "Content cannot be empty"),
        custom(function = "validate_not_blank")
    )]
    pub content: String,
}
