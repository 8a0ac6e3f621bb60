/// Authentication handlers: registration, login, password change
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::user_repo;
use crate::error::{AppError, FieldErrors, Result};
use crate::middleware::UserId;
use crate::security::{jwt, password};
use crate::validators;

pub const WEAK_PASSWORD_MESSAGE: &str =
    "Password must be 8+ characters with uppercase, lowercase, number, and special character";
const INVALID_USERNAME_MESSAGE: &str =
    "Username must be 3-32 characters, alphanumeric with - or _";
const INVALID_EMAIL_MESSAGE: &str = "Enter a valid email address";

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// Identity plus token pair, returned by both register and login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

/// POST /api/v1/auth/register
///
/// Field-level checks collect independently into the error map; within one
/// field the format check runs before the uniqueness lookup. The cross-field
/// confirmation check only runs once every field has passed.
pub async fn register(
    pool: web::Data<PgPool>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse> {
    let mut errors = FieldErrors::new();

    if !validators::validate_username(&req.username) {
        errors.push("username", INVALID_USERNAME_MESSAGE);
    } else if user_repo::username_exists(pool.get_ref(), &req.username).await? {
        errors.push("username", "Username already exists");
    }

    if !validators::validate_email(&req.email) {
        errors.push("email", INVALID_EMAIL_MESSAGE);
    } else if user_repo::email_exists(pool.get_ref(), &req.email).await? {
        errors.push("email", "Email already registered");
    }

    if !validators::validate_password(&req.password) {
        errors.push("password", WEAK_PASSWORD_MESSAGE);
    }

    errors.into_result()?;

    if req.password != req.password_confirm {
        return Err(AppError::Validation(FieldErrors::field(
            "password_confirm",
            "Passwords don't match",
        )));
    }

    let password_hash = password::hash_password(&req.password)?;

    // The unique constraints back up the existence checks above: when two
    // identical registrations race, the losing insert maps to the same
    // per-field duplicate error.
    let user =
        user_repo::create_user(pool.get_ref(), &req.email, &req.username, &password_hash).await?;

    let tokens = jwt::generate_token_pair(user.id, &user.email, &user.username)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    tracing::info!(user_id = %user.id, username = %user.username, "user registered");

    Ok(HttpResponse::Created().json(AuthResponse {
        user_id: user.id,
        username: user.username,
        email: user.email,
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        expires_in: tokens.expires_in,
    }))
}

/// POST /api/v1/auth/login
pub async fn login(pool: web::Data<PgPool>, req: web::Json<LoginRequest>) -> Result<HttpResponse> {
    // An unknown email and a wrong password produce the same error so the
    // response never reveals whether an account exists.
    let user = match user_repo::find_by_email(pool.get_ref(), &req.email).await? {
        Some(user) => user,
        None => return Err(AppError::InvalidCredentials),
    };

    if !password::verify_password(&req.password, &user.password_hash)? {
        return Err(AppError::InvalidCredentials);
    }

    if !user.is_active {
        return Err(AppError::AccountDisabled);
    }

    if let Err(err) = user_repo::record_successful_login(pool.get_ref(), user.id).await {
        tracing::warn!(user_id = %user.id, error = %err, "failed to update last_login_at");
    }

    let tokens = jwt::generate_token_pair(user.id, &user.email, &user.username)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    tracing::info!(user_id = %user.id, "user logged in");

    Ok(HttpResponse::Ok().json(AuthResponse {
        user_id: user.id,
        username: user.username,
        email: user.email,
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        expires_in: tokens.expires_in,
    }))
}

/// POST /api/v1/auth/change-password
pub async fn change_password(
    pool: web::Data<PgPool>,
    user_id: UserId,
    req: web::Json<ChangePasswordRequest>,
) -> Result<HttpResponse> {
    let user = user_repo::find_by_id(pool.get_ref(), user_id.0)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    // The old credential is checked before the new one is inspected, so a
    // wrong old password wins regardless of the new password's validity.
    if !password::verify_password(&req.old_password, &user.password_hash)? {
        return Err(AppError::InvalidCredentials);
    }

    if !validators::validate_password(&req.new_password) {
        return Err(AppError::Validation(FieldErrors::field(
            "new_password",
            WEAK_PASSWORD_MESSAGE,
        )));
    }

    let new_hash = password::hash_password(&req.new_password)?;
    user_repo::update_password(pool.get_ref(), user.id, &new_hash).await?;

    tracing::info!(user_id = %user.id, "password changed");

    Ok(HttpResponse::NoContent().finish())
}
