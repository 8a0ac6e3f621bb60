/// Profile handlers: fetch-or-create read and partial update
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::db::{profile_repo, profile_repo::UpdateProfileFields, user_repo};
use crate::error::{AppError, Result};
use crate::middleware::UserId;
use crate::models::{Profile, User};

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub bio: Option<String>,
    pub location: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub avatar_url: Option<String>,
}

/// Profile fields plus the owning account's read-only identity
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub avatar_url: Option<String>,
}

impl ProfileResponse {
    fn from_parts(user: &User, profile: Profile) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            bio: profile.bio,
            location: profile.location,
            birth_date: profile.birth_date,
            avatar_url: profile.avatar_url,
        }
    }
}

/// GET /api/v1/profile
pub async fn get_profile(pool: web::Data<PgPool>, user_id: UserId) -> Result<HttpResponse> {
    let user = user_repo::find_by_id(pool.get_ref(), user_id.0)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let profile = profile_repo::get_or_create(pool.get_ref(), user.id).await?;

    Ok(HttpResponse::Ok().json(ProfileResponse::from_parts(&user, profile)))
}

/// PUT /api/v1/profile
///
/// Partial merge: unspecified fields are left untouched. The profile row is
/// created first if absent, so an update never 404s.
pub async fn update_profile(
    pool: web::Data<PgPool>,
    user_id: UserId,
    req: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse> {
    let user = user_repo::find_by_id(pool.get_ref(), user_id.0)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    profile_repo::get_or_create(pool.get_ref(), user.id).await?;

    let req = req.into_inner();
    let fields = UpdateProfileFields {
        bio: req.bio,
        location: req.location,
        birth_date: req.birth_date,
        avatar_url: req.avatar_url,
    };

    let profile = profile_repo::update(pool.get_ref(), user.id, &fields).await?;

    Ok(HttpResponse::Ok().json(ProfileResponse::from_parts(&user, profile)))
}
