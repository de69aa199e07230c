use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Language served when a request does not name one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Second choice when an entity has no translation in the requested language.
pub const FALLBACK_LANGUAGE: &str = "en";
