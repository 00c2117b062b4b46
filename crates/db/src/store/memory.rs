//! In-process [`CatalogStore`].
//!
//! Mirrors the PostgreSQL schema rules: names are unique per collection,
//! works must reference existing authors and styles, and referenced authors
//! or styles cannot be deleted. All checks for one operation run under a
//! single write lock, which makes each operation atomic.

use std::collections::BTreeMap;

use acervo_core::lookup::EntityKey;
use acervo_core::period::YearRange;
use acervo_core::types::DbId;
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::constraints::{FK_WORKS_AUTHOR, FK_WORKS_STYLE, UQ_AUTHORS_NAME, UQ_STYLES_NAME};
use super::{CatalogStore, StoreError, StoreResult};
use crate::models::author::{Author, AuthorInput};
use crate::models::style::{Style, StyleInput};
use crate::models::work::{Work, WorkInput};

#[derive(Debug, Default)]
struct Tables {
    styles: BTreeMap<DbId, Style>,
    authors: BTreeMap<DbId, Author>,
    works: BTreeMap<DbId, Work>,
    last_style_id: DbId,
    last_author_id: DbId,
    last_work_id: DbId,
}

impl Tables {
    fn style_id(&self, key: &EntityKey) -> Option<DbId> {
        match key {
            EntityKey::Id(id) => self.styles.contains_key(id).then_some(*id),
            EntityKey::Name(name) => self
                .styles
                .values()
                .find(|s| &s.name == name)
                .map(|s| s.id),
        }
    }

    fn author_id(&self, key: &EntityKey) -> Option<DbId> {
        match key {
            EntityKey::Id(id) => self.authors.contains_key(id).then_some(*id),
            EntityKey::Name(name) => self
                .authors
                .values()
                .find(|a| &a.name == name)
                .map(|a| a.id),
        }
    }

    /// Another style (not `except`) already uses `name`.
    fn style_name_taken(&self, name: &str, except: Option<DbId>) -> bool {
        self.styles
            .values()
            .any(|s| s.name == name && Some(s.id) != except)
    }

    fn author_name_taken(&self, name: &str, except: Option<DbId>) -> bool {
        self.authors
            .values()
            .any(|a| a.name == name && Some(a.id) != except)
    }

    fn check_work_refs(&self, input: &WorkInput) -> StoreResult<()> {
        if !self.authors.contains_key(&input.author_id) {
            return Err(foreign_key(FK_WORKS_AUTHOR));
        }
        if !self.styles.contains_key(&input.style_id) {
            return Err(foreign_key(FK_WORKS_STYLE));
        }
        Ok(())
    }

    fn works_where(&self, predicate: impl Fn(&Work) -> bool) -> Vec<Work> {
        self.works
            .values()
            .filter(|&w| predicate(w))
            .cloned()
            .collect()
    }
}

fn unique(constraint: &str) -> StoreError {
    StoreError::UniqueViolation {
        constraint: constraint.to_string(),
    }
}

fn foreign_key(constraint: &str) -> StoreError {
    StoreError::ForeignKeyViolation {
        constraint: constraint.to_string(),
    }
}

fn next_id(last: &mut DbId) -> DbId {
    *last += 1;
    *last
}

/// Catalog held in memory; contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    tables: RwLock<Tables>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn list_styles(&self) -> StoreResult<Vec<Style>> {
        Ok(self.tables.read().await.styles.values().cloned().collect())
    }

    async fn find_style(&self, key: &EntityKey) -> StoreResult<Option<Style>> {
        let tables = self.tables.read().await;
        Ok(tables
            .style_id(key)
            .and_then(|id| tables.styles.get(&id).cloned()))
    }

    async fn create_style(&self, input: &StyleInput) -> StoreResult<Style> {
        let mut tables = self.tables.write().await;
        if tables.style_name_taken(&input.name, None) {
            return Err(unique(UQ_STYLES_NAME));
        }
        let id = next_id(&mut tables.last_style_id);
        let style = Style {
            id,
            name: input.name.clone(),
        };
        tables.styles.insert(id, style.clone());
        Ok(style)
    }

    async fn update_style(
        &self,
        key: &EntityKey,
        input: &StyleInput,
    ) -> StoreResult<Option<Style>> {
        let mut tables = self.tables.write().await;
        let Some(id) = tables.style_id(key) else {
            return Ok(None);
        };
        if tables.style_name_taken(&input.name, Some(id)) {
            return Err(unique(UQ_STYLES_NAME));
        }
        let style = Style {
            id,
            name: input.name.clone(),
        };
        tables.styles.insert(id, style.clone());
        Ok(Some(style))
    }

    async fn delete_style(&self, key: &EntityKey) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let Some(id) = tables.style_id(key) else {
            return Ok(false);
        };
        if tables.works.values().any(|w| w.style_id == id) {
            return Err(foreign_key(FK_WORKS_STYLE));
        }
        Ok(tables.styles.remove(&id).is_some())
    }

    async fn list_authors(&self) -> StoreResult<Vec<Author>> {
        Ok(self.tables.read().await.authors.values().cloned().collect())
    }

    async fn find_author(&self, key: &EntityKey) -> StoreResult<Option<Author>> {
        let tables = self.tables.read().await;
        Ok(tables
            .author_id(key)
            .and_then(|id| tables.authors.get(&id).cloned()))
    }

    async fn create_author(&self, input: &AuthorInput) -> StoreResult<Author> {
        let mut tables = self.tables.write().await;
        if tables.author_name_taken(&input.name, None) {
            return Err(unique(UQ_AUTHORS_NAME));
        }
        let id = next_id(&mut tables.last_author_id);
        let author = input.clone().into_row(id);
        tables.authors.insert(id, author.clone());
        Ok(author)
    }

    async fn update_author(
        &self,
        key: &EntityKey,
        input: &AuthorInput,
    ) -> StoreResult<Option<Author>> {
        let mut tables = self.tables.write().await;
        let Some(id) = tables.author_id(key) else {
            return Ok(None);
        };
        if tables.author_name_taken(&input.name, Some(id)) {
            return Err(unique(UQ_AUTHORS_NAME));
        }
        let author = input.clone().into_row(id);
        tables.authors.insert(id, author.clone());
        Ok(Some(author))
    }

    async fn delete_author(&self, key: &EntityKey) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let Some(id) = tables.author_id(key) else {
            return Ok(false);
        };
        if tables.works.values().any(|w| w.author_id == id) {
            return Err(foreign_key(FK_WORKS_AUTHOR));
        }
        Ok(tables.authors.remove(&id).is_some())
    }

    async fn set_author_image(
        &self,
        key: &EntityKey,
        image_url: &str,
    ) -> StoreResult<Option<Author>> {
        let mut tables = self.tables.write().await;
        let Some(id) = tables.author_id(key) else {
            return Ok(None);
        };
        Ok(tables.authors.get_mut(&id).map(|author| {
            author.image_url = image_url.to_string();
            author.clone()
        }))
    }

    async fn list_works(&self) -> StoreResult<Vec<Work>> {
        Ok(self.tables.read().await.works.values().cloned().collect())
    }

    async fn list_works_in_range(&self, range: YearRange) -> StoreResult<Vec<Work>> {
        let tables = self.tables.read().await;
        Ok(tables.works_where(|w| range.contains(w.year)))
    }

    async fn find_work(&self, id: DbId) -> StoreResult<Option<Work>> {
        Ok(self.tables.read().await.works.get(&id).cloned())
    }

    async fn list_works_by_title(&self, title: &str) -> StoreResult<Vec<Work>> {
        let needle = title.to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables.works_where(|w| w.title.to_lowercase().contains(&needle)))
    }

    async fn list_works_by_author(&self, key: &EntityKey) -> StoreResult<Vec<Work>> {
        let tables = self.tables.read().await;
        let works = match key {
            EntityKey::Id(id) => tables.works_where(|w| w.author_id == *id),
            EntityKey::Name(_) => match tables.author_id(key) {
                Some(id) => tables.works_where(|w| w.author_id == id),
                None => Vec::new(),
            },
        };
        Ok(works)
    }

    async fn list_works_by_style(&self, key: &EntityKey) -> StoreResult<Vec<Work>> {
        let tables = self.tables.read().await;
        let works = match key {
            EntityKey::Id(id) => tables.works_where(|w| w.style_id == *id),
            EntityKey::Name(_) => match tables.style_id(key) {
                Some(id) => tables.works_where(|w| w.style_id == id),
                None => Vec::new(),
            },
        };
        Ok(works)
    }

    async fn create_work(&self, input: &WorkInput) -> StoreResult<Work> {
        let mut tables = self.tables.write().await;
        tables.check_work_refs(input)?;
        let id = next_id(&mut tables.last_work_id);
        let work = input.clone().into_row(id);
        tables.works.insert(id, work.clone());
        Ok(work)
    }

    async fn update_work(&self, id: DbId, input: &WorkInput) -> StoreResult<Option<Work>> {
        let mut tables = self.tables.write().await;
        if !tables.works.contains_key(&id) {
            return Ok(None);
        }
        tables.check_work_refs(input)?;
        let work = input.clone().into_row(id);
        tables.works.insert(id, work.clone());
        Ok(Some(work))
    }

    async fn delete_work(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.tables.write().await.works.remove(&id).is_some())
    }

    async fn set_work_image(&self, id: DbId, image_url: &str) -> StoreResult<Option<Work>> {
        let mut tables = self.tables.write().await;
        Ok(tables.works.get_mut(&id).map(|work| {
            work.image_url = image_url.to_string();
            work.clone()
        }))
    }
}
