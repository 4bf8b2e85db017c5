//! Integration tests for snack CRUD at the repository layer.
//!
//! Exercises the repositories against a real database:
//! - Create and read back with purchaser resolved to a username
//! - List ordering and counts
//! - Full-replacement update semantics
//! - Unconditional delete

use snackbar_db::models::snack::SnackFields;
use snackbar_db::repositories::{SnackRepo, UserRepo};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_snack(purchaser_id: i64, title: &str, description: &str) -> SnackFields {
    SnackFields {
        title: title.to_string(),
        description: description.to_string(),
        purchaser_id,
    }
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn create_resolves_purchaser_username(pool: SqlitePool) {
    let user = UserRepo::create(&pool, "tester").await.unwrap();

    let snack = SnackRepo::create(
        &pool,
        &new_snack(user.id, "Title of Blog", "Words about the blog"),
    )
    .await
    .unwrap();

    assert_eq!(snack.id, 1);
    assert_eq!(snack.title, "Title of Blog");
    assert_eq!(snack.description, "Words about the blog");
    assert_eq!(snack.purchaser, "tester");
}

#[sqlx::test]
async fn find_by_id_returns_none_for_missing_row(pool: SqlitePool) {
    let found = SnackRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test]
async fn ids_are_sequential_and_stable(pool: SqlitePool) {
    let user = UserRepo::create(&pool, "tester").await.unwrap();

    let first = SnackRepo::create(&pool, &new_snack(user.id, "First", "one"))
        .await
        .unwrap();
    let second = SnackRepo::create(&pool, &new_snack(user.id, "Second", "two"))
        .await
        .unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);

    // Deleting the first row must not disturb the second row's id.
    assert!(SnackRepo::delete(&pool, first.id).await.unwrap());
    let second_again = SnackRepo::find_by_id(&pool, second.id).await.unwrap().unwrap();
    assert_eq!(second_again.id, 2);
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn list_returns_all_rows(pool: SqlitePool) {
    let user = UserRepo::create(&pool, "tester").await.unwrap();

    for i in 0..3 {
        SnackRepo::create(&pool, &new_snack(user.id, &format!("Snack {i}"), "crunchy"))
            .await
            .unwrap();
    }

    let snacks = SnackRepo::list(&pool).await.unwrap();
    assert_eq!(snacks.len(), 3);
    assert_eq!(SnackRepo::count(&pool).await.unwrap(), 3);
    assert!(snacks.iter().all(|s| s.purchaser == "tester"));
}

#[sqlx::test]
async fn list_is_empty_initially(pool: SqlitePool) {
    let snacks = SnackRepo::list(&pool).await.unwrap();
    assert!(snacks.is_empty());
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn update_replaces_all_fields(pool: SqlitePool) {
    let alice = UserRepo::create(&pool, "alice").await.unwrap();
    let bob = UserRepo::create(&pool, "bob").await.unwrap();

    let snack = SnackRepo::create(&pool, &new_snack(alice.id, "Old", "old words"))
        .await
        .unwrap();

    let updated = SnackRepo::update(
        &pool,
        snack.id,
        &new_snack(bob.id, "New", "new words"),
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.id, snack.id);
    assert_eq!(updated.title, "New");
    assert_eq!(updated.description, "new words");
    assert_eq!(updated.purchaser, "bob");
    assert_eq!(updated.created_at, snack.created_at);

    // Update never changes the row count.
    assert_eq!(SnackRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test]
async fn update_missing_row_returns_none(pool: SqlitePool) {
    let user = UserRepo::create(&pool, "tester").await.unwrap();
    let result = SnackRepo::update(&pool, 42, &new_snack(user.id, "T", "D"))
        .await
        .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn delete_removes_the_row(pool: SqlitePool) {
    let user = UserRepo::create(&pool, "tester").await.unwrap();
    let snack = SnackRepo::create(&pool, &new_snack(user.id, "Gone", "soon"))
        .await
        .unwrap();

    assert!(SnackRepo::delete(&pool, snack.id).await.unwrap());
    assert!(SnackRepo::find_by_id(&pool, snack.id).await.unwrap().is_none());
    assert_eq!(SnackRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test]
async fn delete_missing_row_returns_false(pool: SqlitePool) {
    assert!(!SnackRepo::delete(&pool, 7).await.unwrap());
}
