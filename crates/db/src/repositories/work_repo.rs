//! Repository for the `works` table.

use acervo_core::period::YearRange;
use acervo_core::types::DbId;
use sqlx::PgPool;

use crate::models::work::{Work, WorkInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, author_id, year, style_id, material, image_url";

/// Same columns qualified with the `w` alias, for joins.
const W_COLUMNS: &str =
    "w.id, w.title, w.author_id, w.year, w.style_id, w.material, w.image_url";

/// Provides CRUD operations for works.
pub struct WorkRepo;

impl WorkRepo {
    /// Insert a new work, returning the created row.
    ///
    /// Fails with an `fk_works_author` / `fk_works_style` violation if either
    /// reference does not exist.
    pub async fn create(pool: &PgPool, input: &WorkInput) -> Result<Work, sqlx::Error> {
        let query = format!(
            "INSERT INTO works (title, author_id, year, style_id, material, image_url)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Work>(&query)
            .bind(&input.title)
            .bind(input.author_id)
            .bind(input.year)
            .bind(input.style_id)
            .bind(&input.material)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// List all works ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Work>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM works ORDER BY id");
        sqlx::query_as::<_, Work>(&query).fetch_all(pool).await
    }

    /// List works whose year lies in the inclusive range.
    pub async fn list_in_range(pool: &PgPool, range: YearRange) -> Result<Vec<Work>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM works
             WHERE year BETWEEN $1 AND $2
             ORDER BY id"
        );
        sqlx::query_as::<_, Work>(&query)
            .bind(range.start)
            .bind(range.end)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Work>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM works WHERE id = $1");
        sqlx::query_as::<_, Work>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Works whose title contains `title`, ignoring case.
    ///
    /// Uses `strpos` rather than `ILIKE` so `%` and `_` in the search text
    /// are matched literally.
    pub async fn list_by_title(pool: &PgPool, title: &str) -> Result<Vec<Work>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM works
             WHERE strpos(lower(title), lower($1)) > 0
             ORDER BY id"
        );
        sqlx::query_as::<_, Work>(&query)
            .bind(title)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_author_id(
        pool: &PgPool,
        author_id: DbId,
    ) -> Result<Vec<Work>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM works WHERE author_id = $1 ORDER BY id");
        sqlx::query_as::<_, Work>(&query)
            .bind(author_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_author_name(pool: &PgPool, name: &str) -> Result<Vec<Work>, sqlx::Error> {
        let query = format!(
            "SELECT {W_COLUMNS} FROM works w
             JOIN authors a ON a.id = w.author_id
             WHERE a.name = $1
             ORDER BY w.id"
        );
        sqlx::query_as::<_, Work>(&query)
            .bind(name)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_style_id(
        pool: &PgPool,
        style_id: DbId,
    ) -> Result<Vec<Work>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM works WHERE style_id = $1 ORDER BY id");
        sqlx::query_as::<_, Work>(&query)
            .bind(style_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_style_name(pool: &PgPool, name: &str) -> Result<Vec<Work>, sqlx::Error> {
        let query = format!(
            "SELECT {W_COLUMNS} FROM works w
             JOIN styles s ON s.id = w.style_id
             WHERE s.name = $1
             ORDER BY w.id"
        );
        sqlx::query_as::<_, Work>(&query)
            .bind(name)
            .fetch_all(pool)
            .await
    }

    /// Replace every field of a work.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &WorkInput,
    ) -> Result<Option<Work>, sqlx::Error> {
        let query = format!(
            "UPDATE works SET
                title = $2,
                author_id = $3,
                year = $4,
                style_id = $5,
                material = $6,
                image_url = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Work>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.author_id)
            .bind(input.year)
            .bind(input.style_id)
            .bind(&input.material)
            .bind(&input.image_url)
            .fetch_optional(pool)
            .await
    }

    /// Replace only `image_url`. Returns `None` if the work does not exist.
    pub async fn set_image(
        pool: &PgPool,
        id: DbId,
        image_url: &str,
    ) -> Result<Option<Work>, sqlx::Error> {
        let query = format!("UPDATE works SET image_url = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Work>(&query)
            .bind(id)
            .bind(image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a work by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM works WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
