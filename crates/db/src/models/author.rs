//! Author entity model and DTOs.

use acervo_core::types::{DbId, Year};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `authors` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Author {
    pub id: DbId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "ano_nascimento")]
    pub birth_year: Year,
    #[serde(rename = "ano_falecimento")]
    pub death_year: Year,
    #[serde(rename = "pais_origem")]
    pub origin_country: String,
    #[serde(rename = "url_imagem")]
    pub image_url: String,
}

/// DTO for creating or replacing an author. Every field is required.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorInput {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "ano_nascimento")]
    pub birth_year: Year,
    #[serde(rename = "ano_falecimento")]
    pub death_year: Year,
    #[serde(rename = "pais_origem")]
    pub origin_country: String,
    #[serde(rename = "url_imagem")]
    pub image_url: String,
}

impl AuthorInput {
    /// Build the row this input describes under the given id.
    pub fn into_row(self, id: DbId) -> Author {
        Author {
            id,
            name: self.name,
            birth_year: self.birth_year,
            death_year: self.death_year,
            origin_country: self.origin_country,
            image_url: self.image_url,
        }
    }
}
