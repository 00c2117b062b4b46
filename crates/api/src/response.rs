//! Shared response types for API handlers.

use serde::Serialize;

/// Confirmation body returned by successful writes: `{ "Mensagem": "..." }`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    #[serde(rename = "Mensagem")]
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
