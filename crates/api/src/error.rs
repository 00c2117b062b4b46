use acervo_core::error::CoreError;
use acervo_db::store::StoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for storage
/// failures handlers did not translate. Implements [`IntoResponse`] to
/// produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `acervo_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage error from `acervo_db`.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(CoreError::NotFound { entity, key }) => {
                tracing::debug!(%entity, %key, "Lookup missed");
                (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    entity.not_found_message().to_string(),
                )
            }
            AppError::Core(CoreError::ConstraintViolation(msg)) => (
                StatusCode::BAD_REQUEST,
                "CONSTRAINT_VIOLATION",
                msg.clone(),
            ),

            // --- Storage errors ---
            AppError::Store(err) => classify_store_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a storage error that reached the response layer untranslated.
///
/// - Constraint violations map to 400 naming the constraint.
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    match err {
        StoreError::UniqueViolation { constraint }
        | StoreError::ForeignKeyViolation { constraint } => (
            StatusCode::BAD_REQUEST,
            "CONSTRAINT_VIOLATION",
            format!("Write violates constraint: {constraint}"),
        ),
        StoreError::Database(sqlx::Error::RowNotFound) => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        StoreError::Database(other) => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
