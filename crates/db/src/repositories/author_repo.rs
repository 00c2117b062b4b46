//! Repository for the `authors` table.

use acervo_core::types::DbId;
use sqlx::PgPool;

use crate::models::author::{Author, AuthorInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, birth_year, death_year, origin_country, image_url";

/// Provides CRUD operations for authors.
pub struct AuthorRepo;

impl AuthorRepo {
    /// Insert a new author, returning the created row.
    pub async fn create(pool: &PgPool, input: &AuthorInput) -> Result<Author, sqlx::Error> {
        let query = format!(
            "INSERT INTO authors (name, birth_year, death_year, origin_country, image_url)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Author>(&query)
            .bind(&input.name)
            .bind(input.birth_year)
            .bind(input.death_year)
            .bind(&input.origin_country)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// List all authors ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Author>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM authors ORDER BY id");
        sqlx::query_as::<_, Author>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Author>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM authors WHERE id = $1");
        sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Author>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM authors WHERE name = $1");
        sqlx::query_as::<_, Author>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Replace every field of an author by id.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_by_id(
        pool: &PgPool,
        id: DbId,
        input: &AuthorInput,
    ) -> Result<Option<Author>, sqlx::Error> {
        let query = format!(
            "UPDATE authors SET
                name = $2,
                birth_year = $3,
                death_year = $4,
                origin_country = $5,
                image_url = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.birth_year)
            .bind(input.death_year)
            .bind(&input.origin_country)
            .bind(&input.image_url)
            .fetch_optional(pool)
            .await
    }

    /// Replace every field of an author found by its current name.
    pub async fn update_by_name(
        pool: &PgPool,
        name: &str,
        input: &AuthorInput,
    ) -> Result<Option<Author>, sqlx::Error> {
        let query = format!(
            "UPDATE authors SET
                name = $2,
                birth_year = $3,
                death_year = $4,
                origin_country = $5,
                image_url = $6
             WHERE name = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Author>(&query)
            .bind(name)
            .bind(&input.name)
            .bind(input.birth_year)
            .bind(input.death_year)
            .bind(&input.origin_country)
            .bind(&input.image_url)
            .fetch_optional(pool)
            .await
    }

    /// Replace only `image_url`. Returns `None` if the author does not exist.
    pub async fn set_image_by_id(
        pool: &PgPool,
        id: DbId,
        image_url: &str,
    ) -> Result<Option<Author>, sqlx::Error> {
        let query = format!("UPDATE authors SET image_url = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .bind(image_url)
            .fetch_optional(pool)
            .await
    }

    pub async fn set_image_by_name(
        pool: &PgPool,
        name: &str,
        image_url: &str,
    ) -> Result<Option<Author>, sqlx::Error> {
        let query =
            format!("UPDATE authors SET image_url = $2 WHERE name = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Author>(&query)
            .bind(name)
            .bind(image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete an author by id. Returns `true` if a row was removed.
    ///
    /// Fails with an `fk_works_author` violation while works reference it.
    pub async fn delete_by_id(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_by_name(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM authors WHERE name = $1")
            .bind(name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
