use axum::{
    extract::{Extension, Form, Path},
    response::{Json as RespJson, Redirect},
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;

use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::forms::MemoForm;
use crate::model::memo::{Memo, MemoListResponse};
use crate::store;

pub fn memo_router() -> Router {
    Router::new()
        .route("/memos", get(list_memos).post(create_memo))
        .route("/memos/:id", get(get_memo))
        .route("/memos/:id/edit", post(update_memo))
        .route("/memos/:id/delete", post(delete_memo))
}

// List the current user's memos, newest first
async fn list_memos(
    Extension(pool): Extension<SqlitePool>,
    CurrentUser(user): CurrentUser,
) -> Result<RespJson<MemoListResponse>, AppError> {
    let memos = store::memos::list_for_owner(&pool, user.id).await?;
    let total = memos.len();
    Ok(RespJson(MemoListResponse { memos, total }))
}

// Get one memo, owner-scoped
async fn get_memo(
    Extension(pool): Extension<SqlitePool>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<RespJson<Memo>, AppError> {
    let memo = store::memos::find_for_owner(&pool, user.id, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(RespJson(memo))
}

// Create a new memo owned by the current user
async fn create_memo(
    Extension(pool): Extension<SqlitePool>,
    CurrentUser(user): CurrentUser,
    Form(form): Form<MemoForm>,
) -> Result<Redirect, AppError> {
    let valid = form.validate().map_err(AppError::Validation)?;
    let memo = store::memos::create(
        &pool,
        user.id,
        &valid.title,
        &valid.content,
        valid.reminder_date,
    )
    .await?;

    log::info!("user {} created memo {}", user.username, memo.id);
    Ok(Redirect::to("/memos"))
}

// Edit title/content/reminder of an owned memo
async fn update_memo(
    Extension(pool): Extension<SqlitePool>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Form(form): Form<MemoForm>,
) -> Result<Redirect, AppError> {
    let valid = form.validate().map_err(AppError::Validation)?;
    let memo = store::memos::update_for_owner(
        &pool,
        user.id,
        id,
        &valid.title,
        &valid.content,
        valid.reminder_date,
    )
    .await?
    .ok_or(AppError::NotFound)?;

    log::info!("user {} updated memo {}", user.username, memo.id);
    Ok(Redirect::to(&format!("/memos/{}", memo.id)))
}

// Delete an owned memo, permanently
async fn delete_memo(
    Extension(pool): Extension<SqlitePool>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    if !store::memos::delete_for_owner(&pool, user.id, id).await? {
        return Err(AppError::NotFound);
    }

    log::info!("user {} deleted memo {}", user.username, id);
    Ok(Redirect::to("/memos"))
}
