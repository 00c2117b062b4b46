//! Repository for the `styles` table.

use acervo_core::types::DbId;
use sqlx::PgPool;

use crate::models::style::{Style, StyleInput};

const COLUMNS: &str = "id, name";

/// Provides CRUD operations for styles.
pub struct StyleRepo;

impl StyleRepo {
    /// Insert a new style, returning the created row.
    ///
    /// Fails with a `uq_styles_name` violation if the name is taken.
    pub async fn create(pool: &PgPool, input: &StyleInput) -> Result<Style, sqlx::Error> {
        let query = format!("INSERT INTO styles (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Style>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// List all styles ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Style>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM styles ORDER BY id");
        sqlx::query_as::<_, Style>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Style>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM styles WHERE id = $1");
        sqlx::query_as::<_, Style>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Style>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM styles WHERE name = $1");
        sqlx::query_as::<_, Style>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Rename a style by id. Returns `None` if no row with the given `id` exists.
    pub async fn update_by_id(
        pool: &PgPool,
        id: DbId,
        input: &StyleInput,
    ) -> Result<Option<Style>, sqlx::Error> {
        let query = format!("UPDATE styles SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Style>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Rename a style found by its current name.
    pub async fn update_by_name(
        pool: &PgPool,
        name: &str,
        input: &StyleInput,
    ) -> Result<Option<Style>, sqlx::Error> {
        let query = format!("UPDATE styles SET name = $2 WHERE name = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Style>(&query)
            .bind(name)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a style by id. Returns `true` if a row was removed.
    ///
    /// Fails with an `fk_works_style` violation while works reference it.
    pub async fn delete_by_id(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM styles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_by_name(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM styles WHERE name = $1")
            .bind(name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
