//! Handlers for the `/estilo` and `/estilos` resources.
//!
//! Every single-style operation is reachable by id (`/estilo/by-id/{id}`)
//! and by name (`/estilo/by-name/{nome}`); both forms share one inner
//! function taking an [`EntityKey`].

use acervo_core::catalog::Entity;
use acervo_core::error::CoreError;
use acervo_core::lookup::EntityKey;
use acervo_core::types::DbId;
use acervo_db::models::style::{Style, StyleInput};
use acervo_db::models::work::Work;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::{delete_error, write_error};
use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /v1/estilos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Style>>> {
    let styles = state.store.list_styles().await?;
    Ok(Json(styles))
}

/// GET /v1/estilo/by-id/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Style>> {
    get_inner(&state, EntityKey::Id(id)).await
}

/// GET /v1/estilo/by-name/{nome}
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Style>> {
    get_inner(&state, EntityKey::Name(name)).await
}

/// GET /v1/estilo/by-id/{id}/obras
pub async fn works_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Work>>> {
    works_inner(&state, EntityKey::Id(id)).await
}

/// GET /v1/estilo/by-name/{nome}/obras
pub async fn works_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<Work>>> {
    works_inner(&state, EntityKey::Name(name)).await
}

/// POST /v1/estilo
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<StyleInput>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let style = state
        .store
        .create_style(&input)
        .await
        .map_err(write_error(Entity::Style))?;
    tracing::info!(id = style.id, name = %style.name, "Style created");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(Entity::Style.created_message())),
    ))
}

/// PUT /v1/estilo/by-id/{id}
pub async fn update_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<StyleInput>,
) -> AppResult<Json<MessageResponse>> {
    update_inner(&state, EntityKey::Id(id), input).await
}

/// PUT /v1/estilo/by-name/{nome}
pub async fn update_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(input): Json<StyleInput>,
) -> AppResult<Json<MessageResponse>> {
    update_inner(&state, EntityKey::Name(name), input).await
}

/// DELETE /v1/estilo/by-id/{id}
pub async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    delete_inner(&state, EntityKey::Id(id)).await
}

/// DELETE /v1/estilo/by-name/{nome}
pub async fn delete_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    delete_inner(&state, EntityKey::Name(name)).await
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

async fn get_inner(state: &AppState, key: EntityKey) -> AppResult<Json<Style>> {
    let style = state
        .store
        .find_style(&key)
        .await?
        .ok_or_else(|| CoreError::not_found(Entity::Style, key))?;
    Ok(Json(style))
}

async fn works_inner(state: &AppState, key: EntityKey) -> AppResult<Json<Vec<Work>>> {
    if state.store.find_style(&key).await?.is_none() {
        return Err(CoreError::not_found(Entity::Style, key).into());
    }
    let works = state.store.list_works_by_style(&key).await?;
    Ok(Json(works))
}

async fn update_inner(
    state: &AppState,
    key: EntityKey,
    input: StyleInput,
) -> AppResult<Json<MessageResponse>> {
    let style = state
        .store
        .update_style(&key, &input)
        .await
        .map_err(write_error(Entity::Style))?
        .ok_or_else(|| CoreError::not_found(Entity::Style, key))?;
    tracing::info!(id = style.id, name = %style.name, "Style updated");
    Ok(Json(MessageResponse::new(Entity::Style.updated_message())))
}

async fn delete_inner(state: &AppState, key: EntityKey) -> AppResult<Json<MessageResponse>> {
    let deleted = state
        .store
        .delete_style(&key)
        .await
        .map_err(delete_error(Entity::Style))?;
    if !deleted {
        return Err(CoreError::not_found(Entity::Style, key).into());
    }
    tracing::info!(%key, "Style removed");
    Ok(Json(MessageResponse::new(Entity::Style.removed_message())))
}
