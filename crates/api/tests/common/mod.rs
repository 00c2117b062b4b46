#![allow(dead_code)]

use std::sync::Arc;

use acervo_api::config::{ServerConfig, StoreBackend};
use acervo_api::router::build_app_router;
use acervo_api::state::AppState;
use acervo_db::store::MemoryCatalogStore;
use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults and the in-memory store.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store: StoreBackend::Memory,
        database_url: None,
        db_max_connections: 1,
    }
}

/// Build the full application router over a fresh, empty in-memory store.
///
/// Uses the same builder as `main.rs`, so tests exercise the production
/// middleware stack. The router is cheap to clone and every clone shares
/// the same store.
pub fn build_test_app() -> Router {
    let store = Arc::new(MemoryCatalogStore::new());
    build_app_router(AppState::new(store, test_config()))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn patch_json(app: &Router, uri: &str, body: Value) -> Response {
    send(app, Method::PATCH, uri, Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn author_body(name: &str) -> Value {
    json!({
        "nome": name,
        "ano_nascimento": 1881,
        "ano_falecimento": 1973,
        "pais_origem": "Espanha",
        "url_imagem": "https://example.org/autor.jpg",
    })
}

pub fn work_body(title: &str, author_id: i64, style_id: i64, year: i32) -> Value {
    json!({
        "titulo": title,
        "autor": author_id,
        "ano": year,
        "estilo": style_id,
        "material": "Óleo sobre tela",
        "url_imagem": "https://example.org/obra.jpg",
    })
}

/// Create a style and return its id. `name` must be URL-safe.
pub async fn create_style(app: &Router, name: &str) -> i64 {
    let response = post_json(app, "/v1/estilo", json!({ "nome": name })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let style = body_json(get(app, &format!("/v1/estilo/by-name/{name}")).await).await;
    style["id"].as_i64().unwrap()
}

/// Create an author and return its id. `name` must be URL-safe.
pub async fn create_author(app: &Router, name: &str) -> i64 {
    let response = post_json(app, "/v1/autor", author_body(name)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let author = body_json(get(app, &format!("/v1/autor/by-name/{name}")).await).await;
    author["id"].as_i64().unwrap()
}

/// Create a work and return its id, found as the newest work with `title`.
pub async fn create_work(
    app: &Router,
    title: &str,
    author_id: i64,
    style_id: i64,
    year: i32,
) -> i64 {
    let response = post_json(app, "/v1/obra", work_body(title, author_id, style_id, year)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let works = body_json(get(app, &format!("/v1/obras/{title}")).await).await;
    works
        .as_array()
        .unwrap()
        .iter()
        .filter(|w| w["titulo"] == title)
        .filter_map(|w| w["id"].as_i64())
        .max()
        .unwrap()
}
