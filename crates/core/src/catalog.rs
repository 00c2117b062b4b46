//! Catalog entity kinds and the user-facing messages tied to them.
//!
//! Messages are in Portuguese, matching the language of the public API.

use std::fmt;

/// The three record collections of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Style,
    Author,
    Work,
}

impl Entity {
    pub fn label(self) -> &'static str {
        match self {
            Entity::Style => "Estilo",
            Entity::Author => "Autor",
            Entity::Work => "Obra",
        }
    }

    pub fn not_found_message(self) -> &'static str {
        match self {
            Entity::Style => "Erro: Estilo não encontrado.",
            Entity::Author => "Erro: Autor não encontrado.",
            Entity::Work => "Erro: Obra não encontrada.",
        }
    }

    /// Message for a write rejected by a uniqueness or foreign-key rule.
    pub fn constraint_message(self) -> &'static str {
        match self {
            Entity::Style => "Erro: nome do Estilo deve ser único.",
            Entity::Author => "Erro: nome do Autor deve ser único.",
            Entity::Work => "Erro: ids de Autor e Estilo devem existir.",
        }
    }

    /// Message for a delete blocked by works that still reference the record.
    pub fn in_use_message(self) -> String {
        format!("Erro: {} está sendo usado em obras.", self.label())
    }

    pub fn created_message(self) -> &'static str {
        match self {
            Entity::Style => "Estilo inserido com sucesso.",
            Entity::Author => "Autor inserido com sucesso.",
            Entity::Work => "Obra inserida com sucesso.",
        }
    }

    pub fn updated_message(self) -> &'static str {
        match self {
            Entity::Style => "Estilo editado com sucesso.",
            Entity::Author => "Autor editado com sucesso.",
            Entity::Work => "Obra editada com sucesso.",
        }
    }

    pub fn removed_message(self) -> &'static str {
        match self {
            Entity::Style => "Estilo removido com sucesso.",
            Entity::Author => "Autor removido com sucesso.",
            Entity::Work => "Obra removida com sucesso.",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
