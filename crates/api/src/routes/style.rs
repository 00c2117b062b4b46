//! Route definitions for styles.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::style;
use crate::state::AppState;

/// Style routes, mounted under `/v1`.
///
/// ```text
/// GET    /estilos                      -> list
/// POST   /estilo                       -> create
/// GET    /estilo/by-id/{id}            -> get_by_id
/// PUT    /estilo/by-id/{id}            -> update_by_id
/// DELETE /estilo/by-id/{id}            -> delete_by_id
/// GET    /estilo/by-id/{id}/obras      -> works_by_id
/// GET    /estilo/by-name/{nome}        -> get_by_name
/// PUT    /estilo/by-name/{nome}        -> update_by_name
/// DELETE /estilo/by-name/{nome}        -> delete_by_name
/// GET    /estilo/by-name/{nome}/obras  -> works_by_name
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/estilos", get(style::list))
        .route("/estilo", post(style::create))
        .route(
            "/estilo/by-id/{id}",
            get(style::get_by_id)
                .put(style::update_by_id)
                .delete(style::delete_by_id),
        )
        .route("/estilo/by-id/{id}/obras", get(style::works_by_id))
        .route(
            "/estilo/by-name/{nome}",
            get(style::get_by_name)
                .put(style::update_by_name)
                .delete(style::delete_by_name),
        )
        .route("/estilo/by-name/{nome}/obras", get(style::works_by_name))
}
