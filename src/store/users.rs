use crate::error::AppError;
use crate::models::User;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Looks a user up by email. Case-sensitive, like the login key itself.
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, email, password_hash, name, created_at, last_login
         FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Inserts a new user record, generating its id and stamping `created_at`.
///
/// `last_login` starts out null. The store does not pre-check uniqueness;
/// callers check-then-insert, and the UNIQUE constraint on `email` turns a
/// lost race into `Conflict` via the `sqlx::Error` conversion.
pub async fn insert(
    pool: &PgPool,
    email: &str,
    password_hash: &str,
    name: &str,
) -> Result<User, AppError> {
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (id, email, password_hash, name, created_at, last_login)
         VALUES ($1, $2, $3, $4, $5, NULL)
         RETURNING id, email, password_hash, name, created_at, last_login",
    )
    .bind(Uuid::new_v4())
    .bind(email)
    .bind(password_hash)
    .bind(name)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Records a successful login. Unsynchronized read-then-write; last writer wins.
pub async fn update_last_login(
    pool: &PgPool,
    id: Uuid,
    timestamp: DateTime<Utc>,
) -> Result<(), AppError> {
    sqlx::query("UPDATE users SET last_login = $1 WHERE id = $2")
        .bind(timestamp)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
