use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Memo {
    pub id: i64,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub reminder_date: Option<DateTime<Utc>>,
    pub is_reminded: bool,
}

#[derive(Debug, Serialize)]
pub struct MemoListResponse {
    pub memos: Vec<Memo>,
    pub total: usize,
}
