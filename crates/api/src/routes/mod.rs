pub mod author;
pub mod health;
pub mod style;
pub mod work;

use axum::Router;

use crate::state::AppState;

/// Build the `/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /obras                              list (?ano_inicial, ano_final)
/// /obras/{titulo}                     list by title
/// /obra                               create (POST)
/// /obra/{id}                          get, update, delete, patch image
///
/// /autores                            list
/// /autor                              create (POST)
/// /autor/by-id/{id}                   get, update, delete, patch image
/// /autor/by-name/{nome}               get, update, delete, patch image
/// /autor/by-id/{id}/obras             works by author
/// /autor/by-name/{nome}/obras         works by author
///
/// /estilos                            list
/// /estilo                             create (POST)
/// /estilo/by-id/{id}                  get, update, delete
/// /estilo/by-name/{nome}              get, update, delete
/// /estilo/by-id/{id}/obras            works by style
/// /estilo/by-name/{nome}/obras        works by style
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(work::router())
        .merge(author::router())
        .merge(style::router())
}
