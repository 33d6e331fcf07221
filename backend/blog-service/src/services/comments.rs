/// Comment service - visible comment threads and comment submission
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{author_repo, comment_repo, post_repo};
use crate::error::{AppError, Result};
use crate::models::forms::CommentForm;
use crate::models::Comment;

pub struct CommentService {
    pool: PgPool,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Approved comments for a post in thread order.
    pub async fn visible_for_post(&self, post_id: Uuid) -> Result<Vec<Comment>> {
        Ok(comment_repo::approved_for_post(&self.pool, post_id).await?)
    }

    /// Submit a comment on a published post.
    ///
    /// Anonymous submissions are rejected with a user-visible message before
    /// anything is validated or written. The commenter's author record is
    /// bound lazily via get-or-create.
    pub async fn add_comment(
        &self,
        post_id: Uuid,
        acting_user_id: Option<Uuid>,
        form: CommentForm,
    ) -> Result<Comment> {
        let user_id = acting_user_id.ok_or_else(|| {
            AppError::AuthenticationRequired("You need to be logged in to comment.".to_string())
        })?;

        let post = post_repo::find_published(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found.".to_string()))?;

        let bound = form.validate_and_bind().map_err(AppError::Validation)?;
        let author = author_repo::get_or_create(&self.pool, user_id).await?;
        let comment = comment_repo::insert(&self.pool, post.id, author.id, &bound.content).await?;

        tracing::info!(comment_id = %comment.id, post_id = %post.id, "comment added");
        Ok(comment)
    }
}
