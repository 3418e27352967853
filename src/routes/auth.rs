use axum::{
    extract::{Extension, Form},
    response::Redirect,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::auth::{self, SESSION_USER_ID_KEY};
use crate::error::AppError;
use crate::forms::{FieldErrors, RegisterForm};
use crate::store::{self, users::NewUser};

// Payload for login; failures are never field-keyed so there is no
// separate validated form for it.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

pub fn auth_router() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", get(login_page).post(login))
        .route("/logout", post(logout))
}

// Unauthenticated landing point; the redirect target for rejected requests.
// Rendering a real page is the presentation layer's job.
async fn login_page() -> &'static str {
    "Sign in"
}

// Create an account and sign it in immediately
async fn register(
    Extension(pool): Extension<SqlitePool>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Result<Redirect, AppError> {
    let valid = form.validate().map_err(AppError::Validation)?;
    let password_hash = auth::hash_password(&valid.password)?;

    let user = match store::users::create(
        &pool,
        NewUser {
            username: &valid.username,
            email: &valid.email,
            password_hash: &password_hash,
        },
    )
    .await
    {
        Ok(user) => user,
        Err(e) if is_unique_violation(&e) => {
            let mut errors = FieldErrors::new();
            errors.insert(
                "username",
                "A user with that username already exists.".to_owned(),
            );
            return Err(AppError::Validation(errors));
        }
        Err(e) => return Err(e.into()),
    };

    session.cycle_id().await?;
    session.insert(SESSION_USER_ID_KEY, user.id).await?;

    log::info!("registered user {}", user.username);
    Ok(Redirect::to("/memos"))
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

// Verify credentials and establish a session
async fn login(
    Extension(pool): Extension<SqlitePool>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, AppError> {
    let user = store::users::find_by_username(&pool, form.username.trim()).await?;

    // Unknown username, wrong password, and inactive account all answer
    // the same way.
    let user = match user {
        Some(user)
            if user.is_active && auth::verify_password(&form.password, &user.password_hash) =>
        {
            user
        }
        _ => return Err(AppError::LoginFailed),
    };

    session.cycle_id().await?;
    session.insert(SESSION_USER_ID_KEY, user.id).await?;

    log::info!("user {} logged in", user.username);
    Ok(Redirect::to("/memos"))
}

// Terminate the session
async fn logout(session: Session) -> Result<Redirect, AppError> {
    session.flush().await?;
    Ok(Redirect::to("/"))
}
