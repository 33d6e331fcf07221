/// Author service - lazy profile creation and profile updates
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::author_repo;
use crate::error::{AppError, Result};
use crate::models::forms::AuthorForm;
use crate::models::Author;

pub struct AuthorService {
    pool: PgPool,
}

impl AuthorService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The acting user's author record, created on first access.
    /// Calling this twice for the same user returns the same author.
    pub async fn profile(&self, acting_user_id: Uuid) -> Result<Author> {
        Ok(author_repo::get_or_create(&self.pool, acting_user_id).await?)
    }

    /// Validate and apply a profile update.
    pub async fn update_profile(
        &self,
        acting_user_id: Uuid,
        form: AuthorForm,
    ) -> Result<Author> {
        let author = author_repo::get_or_create(&self.pool, acting_user_id).await?;
        let bound = form
            .validate_and_bind(&author)
            .map_err(AppError::Validation)?;

        let updated = author_repo::update_profile(
            &self.pool,
            author.id,
            &bound.bio,
            bound.profile_picture.as_deref(),
        )
        .await?;

        tracing::info!(author_id = %updated.id, "profile updated");
        Ok(updated)
    }
}
