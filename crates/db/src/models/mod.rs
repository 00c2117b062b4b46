//! Catalog row structs and request DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` input DTO used for both insert and replace
//!
//! Rust field names are English; the JSON keys keep the Portuguese names the
//! public API has always used.

pub mod author;
pub mod image;
pub mod style;
pub mod work;
