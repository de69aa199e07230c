use uuid::Uuid;

use crate::errors::AppError;

/// Parses an id taken from the request path. The nil UUID is never
/// assigned to a row, so it is refused along with malformed input.
pub fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    match Uuid::parse_str(raw.trim()) {
        Ok(id) if !id.is_nil() => Ok(id),
        _ => Err(AppError::InvalidInput(format!("'{raw}' is not a valid id"))),
    }
}
