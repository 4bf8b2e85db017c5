//! Repository for the `snacks` table.
//!
//! Read paths join `users` so the purchaser comes back as a username,
//! which is how every API representation renders it.

use snackbar_core::types::DbId;

use crate::models::snack::{SnackFields, SnackRecord};
use crate::DbPool;

/// Joined column list shared across read queries.
const RECORD_COLUMNS: &str = "s.id, s.title, s.description, u.username AS purchaser, \
    s.created_at, s.updated_at";

/// Provides CRUD operations for snacks.
pub struct SnackRepo;

impl SnackRepo {
    /// Insert a new snack, returning its joined API representation.
    ///
    /// The insert and the joined read-back run on one transaction so a
    /// concurrent delete cannot slip between them.
    pub async fn create(pool: &DbPool, input: &SnackFields) -> Result<SnackRecord, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO snacks (title, description, purchaser_id)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.purchaser_id)
        .fetch_one(&mut *tx)
        .await?;

        let query = format!(
            "SELECT {RECORD_COLUMNS} FROM snacks s
             JOIN users u ON u.id = s.purchaser_id
             WHERE s.id = $1"
        );
        let record = sqlx::query_as::<_, SnackRecord>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(record)
    }

    /// Find a snack by ID with the purchaser resolved to a username.
    pub async fn find_by_id(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<SnackRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {RECORD_COLUMNS} FROM snacks s
             JOIN users u ON u.id = s.purchaser_id
             WHERE s.id = $1"
        );
        sqlx::query_as::<_, SnackRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all snacks ordered by id.
    pub async fn list(pool: &DbPool) -> Result<Vec<SnackRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {RECORD_COLUMNS} FROM snacks s
             JOIN users u ON u.id = s.purchaser_id
             ORDER BY s.id"
        );
        sqlx::query_as::<_, SnackRecord>(&query).fetch_all(pool).await
    }

    /// Replace all mutable fields of a snack.
    ///
    /// This is full replacement, not a patch: every field is written.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &SnackFields,
    ) -> Result<Option<SnackRecord>, sqlx::Error> {
        let updated: Option<DbId> = sqlx::query_scalar(
            "UPDATE snacks SET
                title = $2,
                description = $3,
                purchaser_id = $4,
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
             WHERE id = $1
             RETURNING id",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.purchaser_id)
        .fetch_optional(pool)
        .await?;

        match updated {
            Some(id) => Self::find_by_id(pool, id).await,
            None => Ok(None),
        }
    }

    /// Delete a snack unconditionally.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM snacks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all snack rows.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM snacks")
            .fetch_one(pool)
            .await
    }
}
