use std::borrow::Cow;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

static LANGUAGE_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]{2,10}$").expect("language code pattern is valid")
});

pub fn validate_language_code(code: &str) -> Result<(), ValidationError> {
    if LANGUAGE_CODE.is_match(code) {
        Ok(())
    } else {
        Err(new_validation_error(
            "invalid_language_code",
            "Language code must be 2-10 letters, digits, '-' or '_'",
        ))
    }
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(new_validation_error("blank", "Value cannot be blank"));
    }
    Ok(())
}

pub fn validate_date_range(start: NaiveDate, end: Option<NaiveDate>) -> Result<(), ValidationError> {
    match end {
        Some(end) if end < start => Err(new_validation_error(
            "end_before_start",
            "End date must not be before start date",
        )),
        _ => Ok(()),
    }
}

fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}
