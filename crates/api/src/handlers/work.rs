//! Handlers for the `/obra` and `/obras` resources.
//!
//! Works are addressed by id only. Deleting a work is unconditional since
//! nothing references it.

use acervo_core::catalog::Entity;
use acervo_core::error::CoreError;
use acervo_core::types::DbId;
use acervo_db::models::image::UpdateImageUrl;
use acervo_db::models::work::{Work, WorkInput};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use super::write_error;
use crate::error::AppResult;
use crate::query::YearRangeParams;
use crate::response::MessageResponse;
use crate::state::AppState;

const IMAGE_UPDATED: &str = "URL de imagem da Obra alterada com sucesso.";

/// GET /v1/obras?ano_inicial=&ano_final=
///
/// Without a filter (both ends at their defaults) every work is listed.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<YearRangeParams>,
) -> AppResult<Json<Vec<Work>>> {
    let range = params.range();
    let works = if range.is_unbounded() {
        state.store.list_works().await?
    } else {
        state.store.list_works_in_range(range).await?
    };
    Ok(Json(works))
}

/// GET /v1/obra/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Work>> {
    let work = state
        .store
        .find_work(id)
        .await?
        .ok_or_else(|| CoreError::not_found(Entity::Work, id))?;
    Ok(Json(work))
}

/// GET /v1/obras/{titulo}
///
/// Returns an empty list rather than 404 when nothing matches.
pub async fn list_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<Json<Vec<Work>>> {
    let works = state.store.list_works_by_title(&title).await?;
    Ok(Json(works))
}

/// POST /v1/obra
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<WorkInput>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let work = state
        .store
        .create_work(&input)
        .await
        .map_err(write_error(Entity::Work))?;
    tracing::info!(
        id = work.id,
        author_id = work.author_id,
        style_id = work.style_id,
        "Work created"
    );
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(Entity::Work.created_message())),
    ))
}

/// PUT /v1/obra/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<WorkInput>,
) -> AppResult<Json<MessageResponse>> {
    state
        .store
        .update_work(id, &input)
        .await
        .map_err(write_error(Entity::Work))?
        .ok_or_else(|| CoreError::not_found(Entity::Work, id))?;
    tracing::info!(id, "Work updated");
    Ok(Json(MessageResponse::new(Entity::Work.updated_message())))
}

/// DELETE /v1/obra/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !state.store.delete_work(id).await? {
        return Err(CoreError::not_found(Entity::Work, id).into());
    }
    tracing::info!(id, "Work removed");
    Ok(Json(MessageResponse::new(Entity::Work.removed_message())))
}

/// PATCH /v1/obra/{id}
pub async fn patch_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateImageUrl>,
) -> AppResult<Json<MessageResponse>> {
    state
        .store
        .set_work_image(id, &input.image_url)
        .await?
        .ok_or_else(|| CoreError::not_found(Entity::Work, id))?;
    tracing::info!(id, "Work image updated");
    Ok(Json(MessageResponse::new(IMAGE_UPDATED)))
}
