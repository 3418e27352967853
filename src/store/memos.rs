use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::model::memo::Memo;

// Every single-memo accessor carries `id = ? AND user_id = ?` in one
// statement, so a foreign-owned id and a missing id are indistinguishable.

/// Memos owned by `owner`, newest first.
pub async fn list_for_owner(pool: &SqlitePool, owner: Uuid) -> Result<Vec<Memo>, sqlx::Error> {
    sqlx::query_as::<_, Memo>(
        "SELECT id, user_id, title, content, created_at, updated_at, reminder_date, is_reminded
         FROM memos WHERE user_id = ?
         ORDER BY created_at DESC, id DESC",
    )
    .bind(owner)
    .fetch_all(pool)
    .await
}

pub async fn find_for_owner(
    pool: &SqlitePool,
    owner: Uuid,
    id: i64,
) -> Result<Option<Memo>, sqlx::Error> {
    sqlx::query_as::<_, Memo>(
        "SELECT id, user_id, title, content, created_at, updated_at, reminder_date, is_reminded
         FROM memos WHERE id = ? AND user_id = ?",
    )
    .bind(id)
    .bind(owner)
    .fetch_optional(pool)
    .await
}

pub async fn create(
    pool: &SqlitePool,
    owner: Uuid,
    title: &str,
    content: &str,
    reminder_date: Option<DateTime<Utc>>,
) -> Result<Memo, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, Memo>(
        "INSERT INTO memos (user_id, title, content, created_at, updated_at, reminder_date, is_reminded)
         VALUES (?, ?, ?, ?, ?, ?, FALSE)
         RETURNING id, user_id, title, content, created_at, updated_at, reminder_date, is_reminded",
    )
    .bind(owner)
    .bind(title)
    .bind(content)
    .bind(now)
    .bind(now)
    .bind(reminder_date)
    .fetch_one(pool)
    .await
}

/// Owner-scoped update of the mutable fields. `None` means the id does not
/// exist under this owner; `user_id` and `created_at` never change.
pub async fn update_for_owner(
    pool: &SqlitePool,
    owner: Uuid,
    id: i64,
    title: &str,
    content: &str,
    reminder_date: Option<DateTime<Utc>>,
) -> Result<Option<Memo>, sqlx::Error> {
    sqlx::query_as::<_, Memo>(
        "UPDATE memos SET title = ?, content = ?, reminder_date = ?, updated_at = ?
         WHERE id = ? AND user_id = ?
         RETURNING id, user_id, title, content, created_at, updated_at, reminder_date, is_reminded",
    )
    .bind(title)
    .bind(content)
    .bind(reminder_date)
    .bind(Utc::now())
    .bind(id)
    .bind(owner)
    .fetch_optional(pool)
    .await
}

/// Owner-scoped hard delete. Returns whether a row was removed.
pub async fn delete_for_owner(
    pool: &SqlitePool,
    owner: Uuid,
    id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM memos WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(owner)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
