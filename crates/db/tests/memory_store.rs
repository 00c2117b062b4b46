//! Behaviour of the in-memory catalog store.
//!
//! These run without a database and pin down the rules both store
//! implementations share: unique names, referential integrity on writes and
//! deletes, and single-field image patches.

use acervo_core::lookup::EntityKey;
use acervo_core::period::YearRange;
use acervo_db::models::author::AuthorInput;
use acervo_db::models::style::StyleInput;
use acervo_db::models::work::WorkInput;
use acervo_db::store::{constraints, CatalogStore, MemoryCatalogStore, StoreError};
use assert_matches::assert_matches;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn author(name: &str) -> AuthorInput {
    AuthorInput {
        name: name.to_string(),
        birth_year: 1881,
        death_year: 1973,
        origin_country: "Espanha".to_string(),
        image_url: "https://example.org/autor.jpg".to_string(),
    }
}

fn work(title: &str, author_id: i64, style_id: i64, year: i32) -> WorkInput {
    WorkInput {
        title: title.to_string(),
        author_id,
        year,
        style_id,
        material: "Óleo sobre tela".to_string(),
        image_url: "https://example.org/obra.jpg".to_string(),
    }
}

/// Store seeded with one style, one author and no works.
async fn seeded() -> (MemoryCatalogStore, i64, i64) {
    let store = MemoryCatalogStore::new();
    let style = store.create_style(&StyleInput::new("Cubismo")).await.unwrap();
    let author = store.create_author(&author("Pablo Picasso")).await.unwrap();
    (store, style.id, author.id)
}

// ---------------------------------------------------------------------------
// Styles
// ---------------------------------------------------------------------------

#[tokio::test]
async fn created_style_is_retrievable_by_id_and_name() {
    let store = MemoryCatalogStore::new();
    let created = store.create_style(&StyleInput::new("Barroco")).await.unwrap();

    let by_id = store.find_style(&EntityKey::Id(created.id)).await.unwrap();
    let by_name = store.find_style(&"Barroco".into()).await.unwrap();

    assert_eq!(by_id, Some(created.clone()));
    assert_eq!(by_name, Some(created));
}

#[tokio::test]
async fn duplicate_style_name_is_rejected_without_inserting() {
    let store = MemoryCatalogStore::new();
    store.create_style(&StyleInput::new("Barroco")).await.unwrap();

    let err = store
        .create_style(&StyleInput::new("Barroco"))
        .await
        .unwrap_err();

    assert_matches!(
        err,
        StoreError::UniqueViolation { ref constraint }
            if constraint == constraints::UQ_STYLES_NAME
    );
    assert_eq!(store.list_styles().await.unwrap().len(), 1);
}

#[tokio::test]
async fn renaming_style_to_its_own_name_is_allowed() {
    let store = MemoryCatalogStore::new();
    let style = store.create_style(&StyleInput::new("Barroco")).await.unwrap();

    let updated = store
        .update_style(&EntityKey::Id(style.id), &StyleInput::new("Barroco"))
        .await
        .unwrap();

    assert_eq!(updated, Some(style));
}

#[tokio::test]
async fn renaming_style_onto_another_name_is_rejected() {
    let store = MemoryCatalogStore::new();
    store.create_style(&StyleInput::new("Barroco")).await.unwrap();
    store.create_style(&StyleInput::new("Rococó")).await.unwrap();

    let err = store
        .update_style(&"Rococó".into(), &StyleInput::new("Barroco"))
        .await
        .unwrap_err();

    assert_matches!(err, StoreError::UniqueViolation { .. });
    assert!(store.find_style(&"Rococó".into()).await.unwrap().is_some());
}

#[tokio::test]
async fn updating_missing_style_returns_none() {
    let store = MemoryCatalogStore::new();
    let updated = store
        .update_style(&EntityKey::Id(42), &StyleInput::new("Barroco"))
        .await
        .unwrap();
    assert_eq!(updated, None);
}

#[tokio::test]
async fn referenced_style_cannot_be_deleted() {
    let (store, style_id, author_id) = seeded().await;
    store
        .create_work(&work("Guernica", author_id, style_id, 1937))
        .await
        .unwrap();

    let err = store.delete_style(&EntityKey::Id(style_id)).await.unwrap_err();

    assert_matches!(
        err,
        StoreError::ForeignKeyViolation { ref constraint }
            if constraint == constraints::FK_WORKS_STYLE
    );
    assert!(store.find_style(&EntityKey::Id(style_id)).await.unwrap().is_some());
}

#[tokio::test]
async fn unreferenced_style_is_deleted_by_name() {
    let store = MemoryCatalogStore::new();
    let style = store.create_style(&StyleInput::new("Fauvismo")).await.unwrap();

    assert!(store.delete_style(&"Fauvismo".into()).await.unwrap());
    assert_eq!(
        store.find_style(&EntityKey::Id(style.id)).await.unwrap(),
        None
    );
    assert!(!store.delete_style(&"Fauvismo".into()).await.unwrap());
}

// ---------------------------------------------------------------------------
// Authors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn created_author_keeps_every_field() {
    let store = MemoryCatalogStore::new();
    let input = author("Tarsila do Amaral");
    let created = store.create_author(&input).await.unwrap();

    let found = store
        .find_author(&EntityKey::Id(created.id))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(found.name, input.name);
    assert_eq!(found.birth_year, input.birth_year);
    assert_eq!(found.death_year, input.death_year);
    assert_eq!(found.origin_country, input.origin_country);
    assert_eq!(found.image_url, input.image_url);
}

#[tokio::test]
async fn duplicate_author_name_is_rejected() {
    let store = MemoryCatalogStore::new();
    store.create_author(&author("Anita Malfatti")).await.unwrap();

    let err = store
        .create_author(&author("Anita Malfatti"))
        .await
        .unwrap_err();

    assert_matches!(
        err,
        StoreError::UniqueViolation { ref constraint }
            if constraint == constraints::UQ_AUTHORS_NAME
    );
    assert_eq!(store.list_authors().await.unwrap().len(), 1);
}

#[tokio::test]
async fn author_image_patch_changes_only_image_url() {
    let (store, _, author_id) = seeded().await;
    let before = store
        .find_author(&EntityKey::Id(author_id))
        .await
        .unwrap()
        .unwrap();

    let after = store
        .set_author_image(&"Pablo Picasso".into(), "https://example.org/novo.png")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(after.image_url, "https://example.org/novo.png");
    assert_eq!(after.name, before.name);
    assert_eq!(after.birth_year, before.birth_year);
    assert_eq!(after.death_year, before.death_year);
    assert_eq!(after.origin_country, before.origin_country);
}

#[tokio::test]
async fn image_patch_on_missing_author_returns_none() {
    let store = MemoryCatalogStore::new();
    let result = store
        .set_author_image(&EntityKey::Id(9), "https://example.org/x.png")
        .await
        .unwrap();
    assert_eq!(result, None);
}

#[tokio::test]
async fn referenced_author_cannot_be_deleted_until_work_is_gone() {
    let (store, style_id, author_id) = seeded().await;
    let work = store
        .create_work(&work("Les Demoiselles d'Avignon", author_id, style_id, 1907))
        .await
        .unwrap();

    let err = store
        .delete_author(&EntityKey::Id(author_id))
        .await
        .unwrap_err();
    assert_matches!(
        err,
        StoreError::ForeignKeyViolation { ref constraint }
            if constraint == constraints::FK_WORKS_AUTHOR
    );

    assert!(store.delete_work(work.id).await.unwrap());
    assert!(store.delete_author(&EntityKey::Id(author_id)).await.unwrap());
    assert_eq!(
        store.find_author(&EntityKey::Id(author_id)).await.unwrap(),
        None
    );
}

// ---------------------------------------------------------------------------
// Works
// ---------------------------------------------------------------------------

#[tokio::test]
async fn work_with_missing_author_or_style_is_rejected() {
    let (store, style_id, author_id) = seeded().await;

    let err = store
        .create_work(&work("Sem autor", author_id + 100, style_id, 1900))
        .await
        .unwrap_err();
    assert_matches!(
        err,
        StoreError::ForeignKeyViolation { ref constraint }
            if constraint == constraints::FK_WORKS_AUTHOR
    );

    let err = store
        .create_work(&work("Sem estilo", author_id, style_id + 100, 1900))
        .await
        .unwrap_err();
    assert_matches!(
        err,
        StoreError::ForeignKeyViolation { ref constraint }
            if constraint == constraints::FK_WORKS_STYLE
    );

    assert!(store.list_works().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_work_checks_references_and_existence() {
    let (store, style_id, author_id) = seeded().await;
    let created = store
        .create_work(&work("Guernica", author_id, style_id, 1937))
        .await
        .unwrap();

    let missing = store
        .update_work(created.id + 1, &work("Outra", author_id, style_id, 1940))
        .await
        .unwrap();
    assert_eq!(missing, None);

    let err = store
        .update_work(created.id, &work("Guernica", author_id, 999, 1937))
        .await
        .unwrap_err();
    assert_matches!(err, StoreError::ForeignKeyViolation { .. });

    let updated = store
        .update_work(created.id, &work("Guernica (estudo)", author_id, style_id, 1938))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "Guernica (estudo)");
    assert_eq!(updated.year, 1938);
}

#[tokio::test]
async fn range_filter_is_inclusive() {
    let (store, style_id, author_id) = seeded().await;
    for (title, year) in [("A", 1899), ("B", 1900), ("C", 1925), ("D", 1950), ("E", 1951)] {
        store
            .create_work(&work(title, author_id, style_id, year))
            .await
            .unwrap();
    }

    let works = store
        .list_works_in_range(YearRange::new(1900, 1950))
        .await
        .unwrap();
    let years: Vec<i32> = works.iter().map(|w| w.year).collect();

    assert_eq!(years, vec![1900, 1925, 1950]);
}

#[tokio::test]
async fn title_search_is_case_insensitive_substring() {
    let (store, style_id, author_id) = seeded().await;
    store
        .create_work(&work("Guernica", author_id, style_id, 1937))
        .await
        .unwrap();
    store
        .create_work(&work("O Velho Guitarrista", author_id, style_id, 1903))
        .await
        .unwrap();

    let found = store.list_works_by_title("GUERN").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Guernica");

    assert!(store.list_works_by_title("Abaporu").await.unwrap().is_empty());
}

#[tokio::test]
async fn works_are_listed_by_author_and_style_key() {
    let (store, style_id, author_id) = seeded().await;
    let other_style = store
        .create_style(&StyleInput::new("Período Azul"))
        .await
        .unwrap();
    store
        .create_work(&work("Guernica", author_id, style_id, 1937))
        .await
        .unwrap();
    store
        .create_work(&work("O Velho Guitarrista", author_id, other_style.id, 1903))
        .await
        .unwrap();

    let by_author = store.list_works_by_author(&"Pablo Picasso".into()).await.unwrap();
    assert_eq!(by_author.len(), 2);

    let by_style_id = store
        .list_works_by_style(&EntityKey::Id(other_style.id))
        .await
        .unwrap();
    assert_eq!(by_style_id.len(), 1);
    assert_eq!(by_style_id[0].title, "O Velho Guitarrista");

    let by_style_name = store.list_works_by_style(&"Cubismo".into()).await.unwrap();
    assert_eq!(by_style_name.len(), 1);
    assert_eq!(by_style_name[0].title, "Guernica");
}

#[tokio::test]
async fn work_image_patch_and_delete() {
    let (store, style_id, author_id) = seeded().await;
    let created = store
        .create_work(&work("Guernica", author_id, style_id, 1937))
        .await
        .unwrap();

    let patched = store
        .set_work_image(created.id, "https://example.org/guernica.png")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(patched.image_url, "https://example.org/guernica.png");
    assert_eq!(patched.title, created.title);
    assert_eq!(patched.material, created.material);

    assert!(store.delete_work(created.id).await.unwrap());
    assert!(!store.delete_work(created.id).await.unwrap());
    assert_eq!(store.set_work_image(created.id, "x").await.unwrap(), None);
}
