//! The storage collaborator consumed by the API layer.
//!
//! [`CatalogStore`] lists every operation the HTTP handlers need. Two
//! implementations share its semantics:
//!
//! - [`PgCatalogStore`]: PostgreSQL through the repositories, with
//!   uniqueness and referential integrity enforced by schema constraints.
//! - [`MemoryCatalogStore`]: an in-process store for local runs and tests.
//!
//! Both report constraint failures as [`StoreError::UniqueViolation`] or
//! [`StoreError::ForeignKeyViolation`], named after the schema constraint
//! that fired.

mod memory;
mod postgres;

use acervo_core::lookup::EntityKey;
use acervo_core::period::YearRange;
use acervo_core::types::DbId;
use async_trait::async_trait;

use crate::models::author::{Author, AuthorInput};
use crate::models::style::{Style, StyleInput};
use crate::models::work::{Work, WorkInput};

pub use memory::MemoryCatalogStore;
pub use postgres::PgCatalogStore;

/// Schema constraint names, shared by both implementations.
pub mod constraints {
    pub const UQ_STYLES_NAME: &str = "uq_styles_name";
    pub const UQ_AUTHORS_NAME: &str = "uq_authors_name";
    pub const FK_WORKS_AUTHOR: &str = "fk_works_author";
    pub const FK_WORKS_STYLE: &str = "fk_works_style";
}

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    #[error("foreign key constraint violated: {constraint}")]
    ForeignKeyViolation { constraint: String },

    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl StoreError {
    /// True for failures caused by the written data rather than the store.
    pub fn is_constraint(&self) -> bool {
        matches!(
            self,
            StoreError::UniqueViolation { .. } | StoreError::ForeignKeyViolation { .. }
        )
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let constraint = db_err.constraint().unwrap_or("unknown").to_string();
            match db_err.code().as_deref() {
                Some(UNIQUE_VIOLATION) => {
                    tracing::debug!(%constraint, "Unique constraint rejected write");
                    return StoreError::UniqueViolation { constraint };
                }
                Some(FOREIGN_KEY_VIOLATION) => {
                    tracing::debug!(%constraint, "Foreign key constraint rejected write");
                    return StoreError::ForeignKeyViolation { constraint };
                }
                _ => {}
            }
        }
        StoreError::Database(err)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Every storage operation of the catalog.
///
/// Operations addressed by [`EntityKey`] accept either an id or an exact
/// name. Each call is atomic on its own; callers never need a transaction
/// spanning two calls to keep the invariants.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Succeeds when the backing store is reachable.
    async fn health_check(&self) -> StoreResult<()>;

    // -- Styles -------------------------------------------------------------

    async fn list_styles(&self) -> StoreResult<Vec<Style>>;

    async fn find_style(&self, key: &EntityKey) -> StoreResult<Option<Style>>;

    /// Fails with `UniqueViolation` if the name is taken.
    async fn create_style(&self, input: &StyleInput) -> StoreResult<Style>;

    /// `None` if the style does not exist; `UniqueViolation` if the new name
    /// belongs to another style.
    async fn update_style(&self, key: &EntityKey, input: &StyleInput)
        -> StoreResult<Option<Style>>;

    /// `false` if the style does not exist; `ForeignKeyViolation` while
    /// works reference it.
    async fn delete_style(&self, key: &EntityKey) -> StoreResult<bool>;

    // -- Authors ------------------------------------------------------------

    async fn list_authors(&self) -> StoreResult<Vec<Author>>;

    async fn find_author(&self, key: &EntityKey) -> StoreResult<Option<Author>>;

    async fn create_author(&self, input: &AuthorInput) -> StoreResult<Author>;

    async fn update_author(
        &self,
        key: &EntityKey,
        input: &AuthorInput,
    ) -> StoreResult<Option<Author>>;

    async fn delete_author(&self, key: &EntityKey) -> StoreResult<bool>;

    /// Replace only `image_url`; `None` if the author does not exist.
    async fn set_author_image(&self, key: &EntityKey, image_url: &str)
        -> StoreResult<Option<Author>>;

    // -- Works --------------------------------------------------------------

    async fn list_works(&self) -> StoreResult<Vec<Work>>;

    async fn list_works_in_range(&self, range: YearRange) -> StoreResult<Vec<Work>>;

    async fn find_work(&self, id: DbId) -> StoreResult<Option<Work>>;

    /// Case-insensitive substring match on the title.
    async fn list_works_by_title(&self, title: &str) -> StoreResult<Vec<Work>>;

    async fn list_works_by_author(&self, key: &EntityKey) -> StoreResult<Vec<Work>>;

    async fn list_works_by_style(&self, key: &EntityKey) -> StoreResult<Vec<Work>>;

    /// Fails with `ForeignKeyViolation` if the author or style is missing.
    async fn create_work(&self, input: &WorkInput) -> StoreResult<Work>;

    async fn update_work(&self, id: DbId, input: &WorkInput) -> StoreResult<Option<Work>>;

    async fn delete_work(&self, id: DbId) -> StoreResult<bool>;

    async fn set_work_image(&self, id: DbId, image_url: &str) -> StoreResult<Option<Work>>;
}
