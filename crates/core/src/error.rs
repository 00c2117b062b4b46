use crate::catalog::Entity;
use crate::lookup::EntityKey;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with {key}")]
    NotFound { entity: Entity, key: EntityKey },

    /// A uniqueness or foreign-key rule rejected the write.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

impl CoreError {
    pub fn not_found(entity: Entity, key: impl Into<EntityKey>) -> Self {
        CoreError::NotFound {
            entity,
            key: key.into(),
        }
    }
}
