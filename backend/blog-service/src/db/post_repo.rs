use crate::models::Post;
use crate::models::forms::BoundPost;
use sqlx::PgPool;
use uuid::Uuid;

/// Count posts visible to anonymous list views.
pub async fn count_published(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE published = TRUE")
        .fetch_one(pool)
        .await
}

/// One page of published posts, newest first.
pub async fn list_published(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT p.id, p.title, p.content, p.author_id, a.user_id AS author_user_id,
               p.image, p.created_at, p.updated_at, p.published
        FROM posts p
        JOIN authors a ON a.id = p.author_id
        WHERE p.published = TRUE
        ORDER BY p.created_at DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

/// Fetch a post by id only if it is published (anonymous detail access).
pub async fn find_published(pool: &PgPool, post_id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT p.id, p.title, p.content, p.author_id, a.user_id AS author_user_id,
               p.image, p.created_at, p.updated_at, p.published
        FROM posts p
        JOIN authors a ON a.id = p.author_id
        WHERE p.id = $1 AND p.published = TRUE
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await
}

/// Fetch a post by id regardless of publication state (owner edit/delete
/// paths; ownership is checked by the caller).
pub async fn find_by_id(pool: &PgPool, post_id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT p.id, p.title, p.content, p.author_id, a.user_id AS author_user_id,
               p.image, p.created_at, p.updated_at, p.published
        FROM posts p
        JOIN authors a ON a.id = p.author_id
        WHERE p.id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await
}

/// Insert a new post for an author.
pub async fn insert(
    pool: &PgPool,
    author_id: Uuid,
    bound: &BoundPost,
) -> Result<Post, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        WITH inserted AS (
            INSERT INTO posts (title, content, author_id, image, published)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, content, author_id, image, created_at, updated_at, published
        )
        SELECT p.id, p.title, p.content, p.author_id, a.user_id AS author_user_id,
               p.image, p.created_at, p.updated_at, p.published
        FROM inserted p
        JOIN authors a ON a.id = p.author_id
        "#,
    )
    .bind(&bound.title)
    .bind(&bound.content)
    .bind(author_id)
    .bind(bound.image.as_deref())
    .bind(bound.published)
    .fetch_one(pool)
    .await
}

/// Update a post's editable fields; refreshes `updated_at`.
pub async fn update(
    pool: &PgPool,
    post_id: Uuid,
    bound: &BoundPost,
) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        WITH updated AS (
            UPDATE posts
            SET title = $2, content = $3, image = $4, published = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, content, author_id, image, created_at, updated_at, published
        )
        SELECT p.id, p.title, p.content, p.author_id, a.user_id AS author_user_id,
               p.image, p.created_at, p.updated_at, p.published
        FROM updated p
        JOIN authors a ON a.id = p.author_id
        "#,
    )
    .bind(post_id)
    .bind(&bound.title)
    .bind(&bound.content)
    .bind(bound.image.as_deref())
    .bind(bound.published)
    .fetch_optional(pool)
    .await
}

/// Hard delete a post; comments go with it via FK cascade.
pub async fn delete(pool: &PgPool, post_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(post_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Count all posts owned by an author, published or not.
pub async fn count_by_author(pool: &PgPool, author_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE author_id = $1")
        .bind(author_id)
        .fetch_one(pool)
        .await
}

/// One page of an author's posts, newest first, published or not.
pub async fn list_by_author(
    pool: &PgPool,
    author_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT p.id, p.title, p.content, p.author_id, a.user_id AS author_user_id,
               p.image, p.created_at, p.updated_at, p.published
        FROM posts p
        JOIN authors a ON a.id = p.author_id
        WHERE p.author_id = $1
        ORDER BY p.created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(author_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}
