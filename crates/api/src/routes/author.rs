//! Route definitions for authors.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::author;
use crate::state::AppState;

/// Author routes, mounted under `/v1`.
///
/// ```text
/// GET    /autores                      -> list
/// POST   /autor                        -> create
/// GET    /autor/by-id/{id}             -> get_by_id
/// PUT    /autor/by-id/{id}             -> update_by_id
/// DELETE /autor/by-id/{id}             -> delete_by_id
/// PATCH  /autor/by-id/{id}             -> patch_image_by_id
/// GET    /autor/by-id/{id}/obras       -> works_by_id
/// GET    /autor/by-name/{nome}         -> get_by_name
/// PUT    /autor/by-name/{nome}         -> update_by_name
/// DELETE /autor/by-name/{nome}         -> delete_by_name
/// PATCH  /autor/by-name/{nome}         -> patch_image_by_name
/// GET    /autor/by-name/{nome}/obras   -> works_by_name
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/autores", get(author::list))
        .route("/autor", post(author::create))
        .route(
            "/autor/by-id/{id}",
            get(author::get_by_id)
                .put(author::update_by_id)
                .delete(author::delete_by_id)
                .patch(author::patch_image_by_id),
        )
        .route("/autor/by-id/{id}/obras", get(author::works_by_id))
        .route(
            "/autor/by-name/{nome}",
            get(author::get_by_name)
                .put(author::update_by_name)
                .delete(author::delete_by_name)
                .patch(author::patch_image_by_name),
        )
        .route("/autor/by-name/{nome}/obras", get(author::works_by_name))
}
