/// Post handlers - HTTP endpoints for post operations
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::post_repo;
use crate::error::{AppError, FieldErrors, Result};
use crate::middleware::UserId;
use crate::validators;

const DEFAULT_PAGE_SIZE: i64 = 20;
const MAX_PAGE_SIZE: i64 = 100;

/// Shared payload for create and full update. The author never comes from
/// the payload; unknown fields (including any author field a client sends)
/// are ignored.
#[derive(Debug, Deserialize)]
pub struct PostInput {
    pub title: String,
    pub content: String,
    pub is_published: Option<bool>,
}

/// Pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationParams {
    fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }

    fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

/// Validate title and content, collecting both failures; returns the
/// trimmed values that get stored.
fn validate_post_input(input: &PostInput) -> Result<(String, String)> {
    let mut errors = FieldErrors::new();

    if !validators::validate_post_title(&input.title) {
        errors.push("title", "Title must be at least 5 characters long");
    }

    if !validators::validate_post_content(&input.content) {
        errors.push("content", "Content must be at least 10 characters long");
    }

    errors.into_result()?;

    Ok((
        input.title.trim().to_string(),
        input.content.trim().to_string(),
    ))
}

/// POST /api/v1/posts
pub async fn create_post(
    pool: web::Data<PgPool>,
    user_id: UserId,
    req: web::Json<PostInput>,
) -> Result<HttpResponse> {
    let (title, content) = validate_post_input(&req)?;

    let post = post_repo::create_post(
        pool.get_ref(),
        user_id.0,
        &title,
        &content,
        req.is_published.unwrap_or(false),
    )
    .await?;

    tracing::info!(post_id = %post.id, author_id = %user_id.0, "post created");

    Ok(HttpResponse::Created().json(post))
}

/// GET /api/v1/posts
///
/// Public listing: published posts from all authors.
pub async fn list_posts(
    pool: web::Data<PgPool>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let posts = post_repo::list_published(pool.get_ref(), query.limit(), query.offset()).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/v1/my-posts
///
/// The requesting identity's posts regardless of published state.
pub async fn my_posts(
    pool: web::Data<PgPool>,
    user_id: UserId,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let posts =
        post_repo::list_by_author(pool.get_ref(), user_id.0, query.limit(), query.offset()).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/v1/posts/{id}
///
/// Owner-scoped: another author's post is a 404, not a 403.
pub async fn get_post(
    pool: web::Data<PgPool>,
    user_id: UserId,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    match post_repo::find_owned(pool.get_ref(), *post_id, user_id.0).await? {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Err(AppError::NotFound("Post not found".to_string())),
    }
}

/// PUT /api/v1/posts/{id}
pub async fn update_post(
    pool: web::Data<PgPool>,
    user_id: UserId,
    post_id: web::Path<Uuid>,
    req: web::Json<PostInput>,
) -> Result<HttpResponse> {
    let (title, content) = validate_post_input(&req)?;

    match post_repo::update_owned(
        pool.get_ref(),
        *post_id,
        user_id.0,
        &title,
        &content,
        req.is_published,
    )
    .await?
    {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Err(AppError::NotFound("Post not found".to_string())),
    }
}

/// DELETE /api/v1/posts/{id}
pub async fn delete_post(
    pool: web::Data<PgPool>,
    user_id: UserId,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    if post_repo::delete_owned(pool.get_ref(), *post_id, user_id.0).await? {
        tracing::info!(post_id = %post_id, author_id = %user_id.0, "post deleted");
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(AppError::NotFound("Post not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, content: &str) -> PostInput {
        PostInput {
            title: title.to_string(),
            content: content.to_string(),
            is_published: None,
        }
    }

    #[test]
    fn test_valid_input_is_trimmed() {
        let (title, content) =
            validate_post_input(&input("  Hello World  ", "  This is long enough content.  "))
                .unwrap();
        assert_eq!(title, "Hello World");
        assert_eq!(content, "This is long enough content.");
    }

    #[test]
    fn test_short_title_rejected() {
        let result = validate_post_input(&input("Hi", "This is long enough content."));
        match result {
            Err(AppError::Validation(errors)) => {
                assert!(errors.messages("title").is_some());
                assert!(errors.messages("content").is_none());
            }
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_both_failures_collected() {
        let result = validate_post_input(&input("Hi", "short"));
        match result {
            Err(AppError::Validation(errors)) => {
                assert!(errors.messages("title").is_some());
                assert!(errors.messages("content").is_some());
            }
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_pagination_defaults_and_caps() {
        let params = PaginationParams {
            limit: None,
            offset: None,
        };
        assert_eq!(params.limit(), DEFAULT_PAGE_SIZE);
        assert_eq!(params.offset(), 0);

        let params = PaginationParams {
            limit: Some(1000),
            offset: Some(-5),
        };
        assert_eq!(params.limit(), MAX_PAGE_SIZE);
        assert_eq!(params.offset(), 0);
    }
}
