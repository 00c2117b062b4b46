//! PostgreSQL-backed [`CatalogStore`].

use acervo_core::lookup::EntityKey;
use acervo_core::period::YearRange;
use acervo_core::types::DbId;
use async_trait::async_trait;

use super::{CatalogStore, StoreResult};
use crate::models::author::{Author, AuthorInput};
use crate::models::style::{Style, StyleInput};
use crate::models::work::{Work, WorkInput};
use crate::repositories::{AuthorRepo, StyleRepo, WorkRepo};
use crate::DbPool;

/// Dispatches each operation to the repository query matching the key.
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: DbPool,
}

impl PgCatalogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn health_check(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }

    async fn list_styles(&self) -> StoreResult<Vec<Style>> {
        Ok(StyleRepo::list(&self.pool).await?)
    }

    async fn find_style(&self, key: &EntityKey) -> StoreResult<Option<Style>> {
        let style = match key {
            EntityKey::Id(id) => StyleRepo::find_by_id(&self.pool, *id).await?,
            EntityKey::Name(name) => StyleRepo::find_by_name(&self.pool, name).await?,
        };
        Ok(style)
    }

    async fn create_style(&self, input: &StyleInput) -> StoreResult<Style> {
        Ok(StyleRepo::create(&self.pool, input).await?)
    }

    async fn update_style(
        &self,
        key: &EntityKey,
        input: &StyleInput,
    ) -> StoreResult<Option<Style>> {
        let style = match key {
            EntityKey::Id(id) => StyleRepo::update_by_id(&self.pool, *id, input).await?,
            EntityKey::Name(name) => StyleRepo::update_by_name(&self.pool, name, input).await?,
        };
        Ok(style)
    }

    async fn delete_style(&self, key: &EntityKey) -> StoreResult<bool> {
        let deleted = match key {
            EntityKey::Id(id) => StyleRepo::delete_by_id(&self.pool, *id).await?,
            EntityKey::Name(name) => StyleRepo::delete_by_name(&self.pool, name).await?,
        };
        Ok(deleted)
    }

    async fn list_authors(&self) -> StoreResult<Vec<Author>> {
        Ok(AuthorRepo::list(&self.pool).await?)
    }

    async fn find_author(&self, key: &EntityKey) -> StoreResult<Option<Author>> {
        let author = match key {
            EntityKey::Id(id) => AuthorRepo::find_by_id(&self.pool, *id).await?,
            EntityKey::Name(name) => AuthorRepo::find_by_name(&self.pool, name).await?,
        };
        Ok(author)
    }

    async fn create_author(&self, input: &AuthorInput) -> StoreResult<Author> {
        Ok(AuthorRepo::create(&self.pool, input).await?)
    }

    async fn update_author(
        &self,
        key: &EntityKey,
        input: &AuthorInput,
    ) -> StoreResult<Option<Author>> {
        let author = match key {
            EntityKey::Id(id) => AuthorRepo::update_by_id(&self.pool, *id, input).await?,
            EntityKey::Name(name) => AuthorRepo::update_by_name(&self.pool, name, input).await?,
        };
        Ok(author)
    }

    async fn delete_author(&self, key: &EntityKey) -> StoreResult<bool> {
        let deleted = match key {
            EntityKey::Id(id) => AuthorRepo::delete_by_id(&self.pool, *id).await?,
            EntityKey::Name(name) => AuthorRepo::delete_by_name(&self.pool, name).await?,
        };
        Ok(deleted)
    }

    async fn set_author_image(
        &self,
        key: &EntityKey,
        image_url: &str,
    ) -> StoreResult<Option<Author>> {
        let author = match key {
            EntityKey::Id(id) => AuthorRepo::set_image_by_id(&self.pool, *id, image_url).await?,
            EntityKey::Name(name) => {
                AuthorRepo::set_image_by_name(&self.pool, name, image_url).await?
            }
        };
        Ok(author)
    }

    async fn list_works(&self) -> StoreResult<Vec<Work>> {
        Ok(WorkRepo::list(&self.pool).await?)
    }

    async fn list_works_in_range(&self, range: YearRange) -> StoreResult<Vec<Work>> {
        Ok(WorkRepo::list_in_range(&self.pool, range).await?)
    }

    async fn find_work(&self, id: DbId) -> StoreResult<Option<Work>> {
        Ok(WorkRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_works_by_title(&self, title: &str) -> StoreResult<Vec<Work>> {
        Ok(WorkRepo::list_by_title(&self.pool, title).await?)
    }

    async fn list_works_by_author(&self, key: &EntityKey) -> StoreResult<Vec<Work>> {
        let works = match key {
            EntityKey::Id(id) => WorkRepo::list_by_author_id(&self.pool, *id).await?,
            EntityKey::Name(name) => WorkRepo::list_by_author_name(&self.pool, name).await?,
        };
        Ok(works)
    }

    async fn list_works_by_style(&self, key: &EntityKey) -> StoreResult<Vec<Work>> {
        let works = match key {
            EntityKey::Id(id) => WorkRepo::list_by_style_id(&self.pool, *id).await?,
            EntityKey::Name(name) => WorkRepo::list_by_style_name(&self.pool, name).await?,
        };
        Ok(works)
    }

    async fn create_work(&self, input: &WorkInput) -> StoreResult<Work> {
        Ok(WorkRepo::create(&self.pool, input).await?)
    }

    async fn update_work(&self, id: DbId, input: &WorkInput) -> StoreResult<Option<Work>> {
        Ok(WorkRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_work(&self, id: DbId) -> StoreResult<bool> {
        Ok(WorkRepo::delete(&self.pool, id).await?)
    }

    async fn set_work_image(&self, id: DbId, image_url: &str) -> StoreResult<Option<Work>> {
        Ok(WorkRepo::set_image(&self.pool, id, image_url).await?)
    }
}
