use axum::{extract::Extension, routing::get, Router};
use sqlx::SqlitePool;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::routes::auth::auth_router;
use crate::routes::memos::memo_router;

/// Assemble the application router with its session and pool layers.
pub fn app(pool: SqlitePool) -> Router {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store).with_secure(false);

    Router::new()
        // Merge auth routes (register, login, logout)
        .merge(auth_router())
        // Merge memo routes (memos CRUD)
        .merge(memo_router())
        // Unauthenticated home, the logout redirect target
        .route("/", get(home))
        // Add database pool
        .layer(Extension(pool))
        // Add session cookies
        .layer(session_layer)
}

async fn home() -> &'static str {
    "memos-be"
}
