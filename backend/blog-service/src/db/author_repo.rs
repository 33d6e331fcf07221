use crate::models::Author;
use sqlx::PgPool;
use uuid::Uuid;

/// Get the author for a user, creating it on first access.
///
/// A single upsert statement, not check-then-insert: the UNIQUE constraint
/// on `user_id` is what makes concurrent first requests race-safe. The
/// no-op DO UPDATE makes the statement return the existing row.
pub async fn get_or_create(pool: &PgPool, user_id: Uuid) -> Result<Author, sqlx::Error> {
    sqlx::query_as::<_, Author>(
        r#"
        INSERT INTO authors (user_id)
        VALUES ($1)
        ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
        RETURNING id, user_id, bio, profile_picture, created_at
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// Update the profile fields of an author.
pub async fn update_profile(
    pool: &PgPool,
    author_id: Uuid,
    bio: &str,
    profile_picture: Option<&str>,
) -> Result<Author, sqlx::Error> {
    sqlx::query_as::<_, Author>(
        r#"
        UPDATE authors
        SET bio = $2, profile_picture = $3
        WHERE id = $1
        RETURNING id, user_id, bio, profile_picture, created_at
        "#,
    )
    .bind(author_id)
    .bind(bio)
    .bind(profile_picture)
    .fetch_one(pool)
    .await
}
