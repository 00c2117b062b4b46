//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Uniqueness and referential
//! integrity are left to the schema constraints so every write is a single
//! atomic statement; callers classify the resulting `sqlx::Error`.

pub mod author_repo;
pub mod style_repo;
pub mod work_repo;

pub use author_repo::AuthorRepo;
pub use style_repo::StyleRepo;
pub use work_repo::WorkRepo;
