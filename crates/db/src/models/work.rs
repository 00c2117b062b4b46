//! Work entity model and DTOs.

use acervo_core::types::{DbId, Year};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `works` table.
///
/// `author_id` and `style_id` always reference existing rows; the schema
/// rejects writes that would break that and blocks deleting referenced
/// authors or styles.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Work {
    pub id: DbId,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "autor")]
    pub author_id: DbId,
    #[serde(rename = "ano")]
    pub year: Year,
    #[serde(rename = "estilo")]
    pub style_id: DbId,
    pub material: String,
    #[serde(rename = "url_imagem")]
    pub image_url: String,
}

/// DTO for creating or replacing a work. Every field is required.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkInput {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "autor")]
    pub author_id: DbId,
    #[serde(rename = "ano")]
    pub year: Year,
    #[serde(rename = "estilo")]
    pub style_id: DbId,
    pub material: String,
    #[serde(rename = "url_imagem")]
    pub image_url: String,
}

impl WorkInput {
    /// Build the row this input describes under the given id.
    pub fn into_row(self, id: DbId) -> Work {
        Work {
            id,
            title: self.title,
            author_id: self.author_id,
            year: self.year,
            style_id: self.style_id,
            material: self.material,
            image_url: self.image_url,
        }
    }
}
