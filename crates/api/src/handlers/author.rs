//! Handlers for the `/autor` and `/autores` resources.
//!
//! Like styles, each single-author operation has a by-id and a by-name
//! route. Authors additionally support a `PATCH` that replaces only the
//! image URL.

use acervo_core::catalog::Entity;
use acervo_core::error::CoreError;
use acervo_core::lookup::EntityKey;
use acervo_core::types::DbId;
use acervo_db::models::author::{Author, AuthorInput};
use acervo_db::models::image::UpdateImageUrl;
use acervo_db::models::work::Work;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::{delete_error, write_error};
use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

const IMAGE_UPDATED: &str = "URL de imagem do Autor alterada com sucesso.";

/// GET /v1/autores
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Author>>> {
    let authors = state.store.list_authors().await?;
    Ok(Json(authors))
}

/// GET /v1/autor/by-id/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Author>> {
    get_inner(&state, EntityKey::Id(id)).await
}

/// GET /v1/autor/by-name/{nome}
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Author>> {
    get_inner(&state, EntityKey::Name(name)).await
}

/// GET /v1/autor/by-id/{id}/obras
pub async fn works_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Work>>> {
    works_inner(&state, EntityKey::Id(id)).await
}

/// GET /v1/autor/by-name/{nome}/obras
pub async fn works_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<Work>>> {
    works_inner(&state, EntityKey::Name(name)).await
}

/// POST /v1/autor
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<AuthorInput>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let author = state
        .store
        .create_author(&input)
        .await
        .map_err(write_error(Entity::Author))?;
    tracing::info!(id = author.id, name = %author.name, "Author created");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(Entity::Author.created_message())),
    ))
}

/// PUT /v1/autor/by-id/{id}
pub async fn update_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AuthorInput>,
) -> AppResult<Json<MessageResponse>> {
    update_inner(&state, EntityKey::Id(id), input).await
}

/// PUT /v1/autor/by-name/{nome}
pub async fn update_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(input): Json<AuthorInput>,
) -> AppResult<Json<MessageResponse>> {
    update_inner(&state, EntityKey::Name(name), input).await
}

/// DELETE /v1/autor/by-id/{id}
pub async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    delete_inner(&state, EntityKey::Id(id)).await
}

/// DELETE /v1/autor/by-name/{nome}
pub async fn delete_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    delete_inner(&state, EntityKey::Name(name)).await
}

/// PATCH /v1/autor/by-id/{id}
pub async fn patch_image_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateImageUrl>,
) -> AppResult<Json<MessageResponse>> {
    patch_image_inner(&state, EntityKey::Id(id), input).await
}

/// PATCH /v1/autor/by-name/{nome}
pub async fn patch_image_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(input): Json<UpdateImageUrl>,
) -> AppResult<Json<MessageResponse>> {
    patch_image_inner(&state, EntityKey::Name(name), input).await
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

async fn get_inner(state: &AppState, key: EntityKey) -> AppResult<Json<Author>> {
    let author = state
        .store
        .find_author(&key)
        .await?
        .ok_or_else(|| CoreError::not_found(Entity::Author, key))?;
    Ok(Json(author))
}

async fn works_inner(state: &AppState, key: EntityKey) -> AppResult<Json<Vec<Work>>> {
    if state.store.find_author(&key).await?.is_none() {
        return Err(CoreError::not_found(Entity::Author, key).into());
    }
    let works = state.store.list_works_by_author(&key).await?;
    Ok(Json(works))
}

async fn update_inner(
    state: &AppState,
    key: EntityKey,
    input: AuthorInput,
) -> AppResult<Json<MessageResponse>> {
    let author = state
        .store
        .update_author(&key, &input)
        .await
        .map_err(write_error(Entity::Author))?
        .ok_or_else(|| CoreError::not_found(Entity::Author, key))?;
    tracing::info!(id = author.id, name = %author.name, "Author updated");
    Ok(Json(MessageResponse::new(Entity::Author.updated_message())))
}

async fn delete_inner(state: &AppState, key: EntityKey) -> AppResult<Json<MessageResponse>> {
    let deleted = state
        .store
        .delete_author(&key)
        .await
        .map_err(delete_error(Entity::Author))?;
    if !deleted {
        return Err(CoreError::not_found(Entity::Author, key).into());
    }
    tracing::info!(%key, "Author removed");
    Ok(Json(MessageResponse::new(Entity::Author.removed_message())))
}

async fn patch_image_inner(
    state: &AppState,
    key: EntityKey,
    input: UpdateImageUrl,
) -> AppResult<Json<MessageResponse>> {
    let author = state
        .store
        .set_author_image(&key, &input.image_url)
        .await?
        .ok_or_else(|| CoreError::not_found(Entity::Author, key))?;
    tracing::info!(id = author.id, "Author image updated");
    Ok(Json(MessageResponse::new(IMAGE_UPDATED)))
}
