use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts, Extension};
use sqlx::SqlitePool;
use tower_sessions::Session;
use uuid::Uuid;

use crate::error::AppError;
use crate::model::user::User;
use crate::store;

/// The only value kept in the session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Hash a password with Argon2id and a fresh random salt. Returns a
/// PHC-format string for the `password_hash` column.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(AppError::PasswordHash)
}

/// Verify a password against a stored PHC-format hash. A malformed hash
/// counts as a mismatch.
pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

/// The authenticated user for this request, resolved from the session.
/// Rejection is a redirect to the login entry point, so handlers taking
/// this extractor never run unauthenticated.
pub struct CurrentUser(pub User);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::Unauthenticated)?;
        let user_id: Uuid = session
            .get(SESSION_USER_ID_KEY)
            .await?
            .ok_or(AppError::Unauthenticated)?;

        let Extension(pool) = Extension::<SqlitePool>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::Unauthenticated)?;

        // A session pointing at a deleted or deactivated account is dead.
        let user = store::users::find_by_id(&pool, user_id)
            .await?
            .filter(|user| user.is_active)
            .ok_or(AppError::Unauthenticated)?;

        Ok(CurrentUser(user))
    }
}
