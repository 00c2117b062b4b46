//! Route definitions for works.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::work;
use crate::state::AppState;

/// Work routes, mounted under `/v1`.
///
/// ```text
/// GET    /obras            -> list (?ano_inicial=&ano_final=)
/// GET    /obras/{titulo}   -> list_by_title
/// POST   /obra             -> create
/// GET    /obra/{id}        -> get_by_id
/// PUT    /obra/{id}        -> update
/// DELETE /obra/{id}        -> delete
/// PATCH  /obra/{id}        -> patch_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/obras", get(work::list))
        .route("/obras/{titulo}", get(work::list_by_title))
        .route("/obra", post(work::create))
        .route(
            "/obra/{id}",
            get(work::get_by_id)
                .put(work::update)
                .delete(work::delete)
                .patch(work::patch_image),
        )
}
