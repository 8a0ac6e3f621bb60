/// Post repository - CRUD scoped by ownership where the contract requires it
use crate::error::Result;
use crate::models::Post;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new post owned by `author_id`
pub async fn create_post(
    pool: &PgPool,
    author_id: Uuid,
    title: &str,
    content: &str,
    is_published: bool,
) -> Result<Post> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (id, author_id, title, content, is_published)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, author_id, title, content, is_published, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(author_id)
    .bind(title)
    .bind(content)
    .bind(is_published)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// List published posts from all authors, newest first
pub async fn list_published(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Post>> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, author_id, title, content, is_published, created_at, updated_at
        FROM posts
        WHERE is_published
        ORDER BY created_at DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// List all posts by one author regardless of published state, newest first
pub async fn list_by_author(
    pool: &PgPool,
    author_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<Post>> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, author_id, title, content, is_published, created_at, updated_at
        FROM posts
        WHERE author_id = $1
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(author_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Find a post owned by `author_id`; a foreign post is indistinguishable
/// from a missing one.
pub async fn find_owned(pool: &PgPool, post_id: Uuid, author_id: Uuid) -> Result<Option<Post>> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, author_id, title, content, is_published, created_at, updated_at
        FROM posts
        WHERE id = $1 AND author_id = $2
        "#,
    )
    .bind(post_id)
    .bind(author_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Full update of an owned post. Returns None when the row does not exist
/// or belongs to another author.
pub async fn update_owned(
    pool: &PgPool,
    post_id: Uuid,
    author_id: Uuid,
    title: &str,
    content: &str,
    is_published: Option<bool>,
) -> Result<Option<Post>> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET title = $3,
            content = $4,
            is_published = COALESCE($5, is_published),
            updated_at = NOW()
        WHERE id = $1 AND author_id = $2
        RETURNING id, author_id, title, content, is_published, created_at, updated_at
        "#,
    )
    .bind(post_id)
    .bind(author_id)
    .bind(title)
    .bind(content)
    .bind(is_published)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Delete an owned post. Returns false when nothing matched.
pub async fn delete_owned(pool: &PgPool, post_id: Uuid, author_id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM posts
        WHERE id = $1 AND author_id = $2
        "#,
    )
    .bind(post_id)
    .bind(author_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
