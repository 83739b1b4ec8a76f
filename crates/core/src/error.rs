use crate::types::DbId;

/// Domain-level failures raised before or instead of a database write.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced parent row does not exist.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Request input that could not be decoded.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The request did not identify an acting user.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
