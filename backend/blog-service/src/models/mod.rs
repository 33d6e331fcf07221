/// Data models for the blog service
///
/// Row types map directly onto the authors/posts/comments tables. `Post`
/// additionally carries `author_user_id` (joined from authors) so ownership
/// checks never need a second lookup.
pub mod forms;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Profile entity wrapping a user identity; owns posts and comments.
/// Created lazily via get-or-create keyed on `user_id`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Author {
    pub id: Uuid,
    pub user_id: Uuid,
    pub bio: String,
    pub profile_picture: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A blog post. `author_user_id` is joined from the owning author row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
    pub author_user_id: Uuid,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published: bool,
}

/// A comment on a post, shown oldest first (thread order).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub approved: bool,
}
