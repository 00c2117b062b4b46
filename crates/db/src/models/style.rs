//! Style entity model and DTOs.

use acervo_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `styles` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Style {
    pub id: DbId,
    #[serde(rename = "nome")]
    pub name: String,
}

/// DTO for creating or replacing a style.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleInput {
    #[serde(rename = "nome")]
    pub name: String,
}

impl StyleInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
