use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::timestamps::Timestamps;
use crate::domain::validation::validate_not_blank;

/// A technology or skill, shared between experiences and projects.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Stack {
    pub id: Uuid,
    pub name: String,
    pub icon_url: Option<String>,
    pub category: Option<String>,
    pub proficiency: Option<i32>,
    #[serde(skip)]
    #[sqlx(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StackInput {
    #[validate(
        length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,

    #[validate(length(max = 2048, message = "Icon URL is too long"))]
    pub icon_url: Option<String>,

    #[validate(length(max = 100, message = "Category is too long"))]
    pub category: Option<String>,

    #[validate(range(min = 0, max = 100, message = "Proficiency must be between 0 and 100"))]
    pub proficiency: Option<i32>,
}
