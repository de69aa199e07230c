use chrono::{DateTime, Utc};

/// Bookkeeping columns shared by every base table.
#[derive(Debug, Clone, Default, PartialEq, sqlx::FromRow)]
pub struct Timestamps {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
