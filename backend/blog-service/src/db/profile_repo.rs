/// Profile repository - fetch-or-create semantics and partial updates
use crate::error::Result;
use crate::models::Profile;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

/// Optional fields for profile updates; absent fields are left untouched
#[derive(Debug, Default)]
pub struct UpdateProfileFields {
    pub bio: Option<String>,
    pub location: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub avatar_url: Option<String>,
}

/// Fetch the profile for a user, creating an empty one if absent.
///
/// The insert is idempotent under concurrent callers: the user_id primary
/// key plus ON CONFLICT DO NOTHING means every caller converges on the same
/// single row.
pub async fn get_or_create(pool: &PgPool, user_id: Uuid) -> Result<Profile> {
    sqlx::query(
        r#"
        INSERT INTO profiles (user_id)
        VALUES ($1)
        ON CONFLICT (user_id) DO NOTHING
        "#,
    )
    .bind(user_id)
    .execute(pool)
    .await?;

    let profile = sqlx::query_as::<_, Profile>(
        r#"
        SELECT user_id, bio, location, birth_date, avatar_url, created_at, updated_at
        FROM profiles
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(profile)
}

/// Partial-merge update: only provided fields change
pub async fn update(pool: &PgPool, user_id: Uuid, fields: &UpdateProfileFields) -> Result<Profile> {
    let profile = sqlx::query_as::<_, Profile>(
        r#"
        UPDATE profiles
        SET bio = COALESCE($2, bio),
            location = COALESCE($3, location),
            birth_date = COALESCE($4, birth_date),
            avatar_url = COALESCE($5, avatar_url),
            updated_at = NOW()
        WHERE user_id = $1
        RETURNING user_id, bio, location, birth_date, avatar_url, created_at, updated_at
        "#,
    )
    .bind(user_id)
    .bind(fields.bio.as_deref())
    .bind(fields.location.as_deref())
    .bind(fields.birth_date)
    .bind(fields.avatar_url.as_deref())
    .fetch_one(pool)
    .await?;

    Ok(profile)
}
