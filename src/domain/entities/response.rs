use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body returned by admin create and update calls.
#[derive(Debug, Serialize, Deserialize)]
pub struct MutationResponse {
    pub id: Uuid,
    pub message: String,
}

impl MutationResponse {
    pub fn new(id: Uuid, message: impl Into<String>) -> Self {
        MutationResponse { id, message: message.into() }
    }
}
