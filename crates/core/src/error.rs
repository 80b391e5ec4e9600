use crate::types::DbId;
use crate::validation::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// One or more payload fields broke their schema constraints.
    #[error("Validation failed: {} invalid field(s)", .0.len())]
    InvalidFields(Vec<FieldViolation>),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid search mode: {0}")]
    InvalidSearchMode(String),

    /// Delete refused because other rows still reference the entity.
    ///
    /// `dependents` is the JSON key under which `ids` are reported.
    #[error("Cannot delete {entity}: still referenced by {} {dependents}", .ids.len())]
    DeleteRestricted {
        entity: &'static str,
        dependents: &'static str,
        ids: Vec<DbId>,
    },
}
