//! Integration tests for the PostgreSQL catalog store.
//!
//! Exercises the repository layer against a real database:
//! - Unique constraint violations on style and author names
//! - Foreign key violations on work writes and on deletes
//! - Name-based lookups and joins
//!
//! Requires `DATABASE_URL`; each test runs in a fresh database.

use acervo_core::lookup::EntityKey;
use acervo_core::period::YearRange;
use acervo_db::models::author::AuthorInput;
use acervo_db::models::style::StyleInput;
use acervo_db::models::work::WorkInput;
use acervo_db::store::{constraints, CatalogStore, PgCatalogStore, StoreError};
use assert_matches::assert_matches;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_author(name: &str) -> AuthorInput {
    AuthorInput {
        name: name.to_string(),
        birth_year: 1886,
        death_year: 1973,
        origin_country: "Brasil".to_string(),
        image_url: "https://example.org/autor.jpg".to_string(),
    }
}

fn new_work(title: &str, author_id: i64, style_id: i64, year: i32) -> WorkInput {
    WorkInput {
        title: title.to_string(),
        author_id,
        year,
        style_id,
        material: "Óleo sobre tela".to_string(),
        image_url: "https://example.org/obra.jpg".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_health_check(pool: PgPool) {
    acervo_db::health_check(&pool).await.unwrap();
    PgCatalogStore::new(pool).health_check().await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_style_name_maps_to_unique_violation(pool: PgPool) {
    let store = PgCatalogStore::new(pool);
    store.create_style(&StyleInput::new("Cubismo")).await.unwrap();

    let err = store
        .create_style(&StyleInput::new("Cubismo"))
        .await
        .unwrap_err();

    assert_matches!(
        err,
        StoreError::UniqueViolation { ref constraint }
            if constraint == constraints::UQ_STYLES_NAME
    );
    assert_eq!(store.list_styles().await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_author_name_maps_to_unique_violation(pool: PgPool) {
    let store = PgCatalogStore::new(pool);
    store.create_author(&new_author("Tarsila do Amaral")).await.unwrap();

    let err = store
        .create_author(&new_author("Tarsila do Amaral"))
        .await
        .unwrap_err();

    assert_matches!(
        err,
        StoreError::UniqueViolation { ref constraint }
            if constraint == constraints::UQ_AUTHORS_NAME
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_work_with_missing_author_maps_to_fk_violation(pool: PgPool) {
    let store = PgCatalogStore::new(pool);
    let style = store.create_style(&StyleInput::new("Modernismo")).await.unwrap();

    let err = store
        .create_work(&new_work("Abaporu", 999_999, style.id, 1928))
        .await
        .unwrap_err();

    assert_matches!(
        err,
        StoreError::ForeignKeyViolation { ref constraint }
            if constraint == constraints::FK_WORKS_AUTHOR
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_referenced_rows_cannot_be_deleted(pool: PgPool) {
    let store = PgCatalogStore::new(pool);
    let style = store.create_style(&StyleInput::new("Modernismo")).await.unwrap();
    let author = store.create_author(&new_author("Tarsila do Amaral")).await.unwrap();
    let work = store
        .create_work(&new_work("Abaporu", author.id, style.id, 1928))
        .await
        .unwrap();

    let err = store.delete_style(&EntityKey::Id(style.id)).await.unwrap_err();
    assert_matches!(
        err,
        StoreError::ForeignKeyViolation { ref constraint }
            if constraint == constraints::FK_WORKS_STYLE
    );

    let err = store
        .delete_author(&"Tarsila do Amaral".into())
        .await
        .unwrap_err();
    assert_matches!(
        err,
        StoreError::ForeignKeyViolation { ref constraint }
            if constraint == constraints::FK_WORKS_AUTHOR
    );

    assert!(store.delete_work(work.id).await.unwrap());
    assert!(store.delete_style(&"Modernismo".into()).await.unwrap());
    assert!(store.delete_author(&EntityKey::Id(author.id)).await.unwrap());
    assert_eq!(
        store.find_author(&EntityKey::Id(author.id)).await.unwrap(),
        None
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_lookups_by_name_range_and_title(pool: PgPool) {
    let store = PgCatalogStore::new(pool);
    let style = store.create_style(&StyleInput::new("Modernismo")).await.unwrap();
    let author = store.create_author(&new_author("Tarsila do Amaral")).await.unwrap();
    store
        .create_work(&new_work("Abaporu", author.id, style.id, 1928))
        .await
        .unwrap();
    store
        .create_work(&new_work("Operários", author.id, style.id, 1933))
        .await
        .unwrap();

    let by_author = store
        .list_works_by_author(&"Tarsila do Amaral".into())
        .await
        .unwrap();
    assert_eq!(by_author.len(), 2);

    let by_style = store.list_works_by_style(&"Modernismo".into()).await.unwrap();
    assert_eq!(by_style.len(), 2);

    let in_range = store
        .list_works_in_range(YearRange::new(1920, 1930))
        .await
        .unwrap();
    assert_eq!(in_range.len(), 1);
    assert_eq!(in_range[0].title, "Abaporu");

    let by_title = store.list_works_by_title("abap").await.unwrap();
    assert_eq!(by_title.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_image_patch_leaves_other_fields(pool: PgPool) {
    let store = PgCatalogStore::new(pool);
    let author = store.create_author(&new_author("Anita Malfatti")).await.unwrap();

    let patched = store
        .set_author_image(&EntityKey::Id(author.id), "https://example.org/nova.png")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(patched.image_url, "https://example.org/nova.png");
    assert_eq!(patched.name, author.name);
    assert_eq!(patched.birth_year, author.birth_year);
    assert_eq!(patched.origin_country, author.origin_country);
}
