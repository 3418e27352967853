use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::model::user::User;

pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}

/// Insert a new account. A taken username surfaces as a unique-constraint
/// violation in the returned error; callers map it to a field error.
pub async fn create(pool: &SqlitePool, new_user: NewUser<'_>) -> Result<User, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, User>(
        "INSERT INTO users (id, username, email, password_hash, is_active, is_staff, is_superuser, created_at, updated_at)
         VALUES (?, ?, ?, ?, TRUE, FALSE, FALSE, ?, ?)
         RETURNING id, username, email, password_hash, is_active, is_staff, is_superuser, created_at, updated_at",
    )
    .bind(Uuid::new_v4())
    .bind(new_user.username)
    .bind(new_user.email)
    .bind(new_user.password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, username, email, password_hash, is_active, is_staff, is_superuser, created_at, updated_at
         FROM users WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn find_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, username, email, password_hash, is_active, is_staff, is_superuser, created_at, updated_at
         FROM users WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}
