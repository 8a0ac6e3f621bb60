/// User repository - handles all database operations for accounts
use crate::error::{AppError, FieldErrors, Result};
use crate::models::User;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

const USERNAME_UNIQUE_CONSTRAINT: &str = "users_username_key";
const EMAIL_UNIQUE_CONSTRAINT: &str = "users_email_key";

/// Create a new user in the database
///
/// A unique-constraint violation from a concurrent duplicate registration is
/// mapped back onto the offending field, so the losing request gets the same
/// response shape as one caught by the pre-insert existence checks.
pub async fn create_user(
    pool: &PgPool,
    email: &str,
    username: &str,
    password_hash: &str,
) -> Result<User> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let result = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, username, password_hash, is_active, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, username, email, password_hash, is_active, created_at, updated_at, last_login_at
        "#,
    )
    .bind(id)
    .bind(email.to_lowercase())
    .bind(username)
    .bind(password_hash)
    .bind(true) // is_active
    .bind(now) // created_at
    .bind(now) // updated_at
    .fetch_one(pool)
    .await;

    result.map_err(|err| {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.constraint() == Some(USERNAME_UNIQUE_CONSTRAINT) {
                return AppError::Validation(FieldErrors::field(
                    "username",
                    "Username already exists",
                ));
            }
            if db_err.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT) {
                return AppError::Validation(FieldErrors::field(
                    "email",
                    "Email already registered",
                ));
            }
        }
        AppError::Database(err)
    })
}

/// Find a user by email
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, is_active, created_at, updated_at, last_login_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email.to_lowercase())
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Find a user by ID
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, is_active, created_at, updated_at, last_login_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Check if email is already taken
pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
        "#,
    )
    .bind(email.to_lowercase())
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

/// Check if username is already taken
pub async fn username_exists(pool: &PgPool, username: &str) -> Result<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)
        "#,
    )
    .bind(username)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

/// Replace a user's stored credential hash
pub async fn update_password(pool: &PgPool, user_id: Uuid, new_password_hash: &str) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE users
        SET password_hash = $1, updated_at = $2
        WHERE id = $3
        "#,
    )
    .bind(new_password_hash)
    .bind(Utc::now())
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Record a successful login
pub async fn record_successful_login(pool: &PgPool, user_id: Uuid) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE users
        SET last_login_at = $1, updated_at = $1
        WHERE id = $2
        "#,
    )
    .bind(Utc::now())
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(())
}
