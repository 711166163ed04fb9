#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// `id` is kept as text so identifiers that fail to parse can be reported
    /// the same way as well-formed ones that match nothing.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}
