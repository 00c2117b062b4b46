//! HTTP handlers, one module per catalog collection.
//!
//! Handlers make one storage call per step and translate storage outcomes
//! into the catalog's status codes and messages.

pub mod author;
pub mod style;
pub mod work;

use acervo_core::catalog::Entity;
use acervo_core::error::CoreError;
use acervo_db::store::StoreError;

use crate::error::AppError;

/// Map a failed insert or edit on `entity` to the client-facing error.
///
/// Uniqueness and reference failures become [`CoreError::ConstraintViolation`];
/// anything else passes through as a storage error.
fn write_error(entity: Entity) -> impl Fn(StoreError) -> AppError {
    move |err| {
        if err.is_constraint() {
            tracing::info!(%entity, error = %err, "Write rejected by constraint");
            CoreError::ConstraintViolation(entity.constraint_message().to_string()).into()
        } else {
            AppError::Store(err)
        }
    }
}

/// Map a failed delete on `entity`: a reference violation means works still
/// point at the record.
fn delete_error(entity: Entity) -> impl Fn(StoreError) -> AppError {
    move |err| match err {
        StoreError::ForeignKeyViolation { .. } => {
            tracing::info!(%entity, error = %err, "Delete blocked by referencing works");
            CoreError::ConstraintViolation(entity.in_use_message()).into()
        }
        other => AppError::Store(other),
    }
}
