/// Post service - listing, creation, editing, and deletion of posts
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{author_repo, post_repo};
use crate::error::{AppError, Result};
use crate::middleware::check_post_ownership;
use crate::models::forms::PostForm;
use crate::models::Post;
use crate::pagination::{Page, PageRequest, Pager, DEFAULT_PAGE_SIZE};

pub struct PostService {
    pool: PgPool,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// One page of published posts, newest first.
    pub async fn list_published(&self, requested: PageRequest) -> Result<Page<Post>> {
        let total = post_repo::count_published(&self.pool).await?;
        let pager = Pager::new(total, DEFAULT_PAGE_SIZE);
        let number = pager.resolve(requested);
        let items =
            post_repo::list_published(&self.pool, pager.page_size(), pager.offset(number)).await?;

        Ok(Page::new(items, number, DEFAULT_PAGE_SIZE, total))
    }

    /// A published post by id; unpublished posts are NotFound to this path.
    pub async fn get_published(&self, post_id: Uuid) -> Result<Post> {
        post_repo::find_published(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found.".to_string()))
    }

    /// Load a post for its owner to edit or delete. NotFound if the id is
    /// absent, Forbidden if it exists but belongs to someone else.
    pub async fn load_for_modify(&self, post_id: Uuid, acting_user_id: Uuid) -> Result<Post> {
        let post = post_repo::find_by_id(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found.".to_string()))?;

        check_post_ownership(acting_user_id, &post)?;
        Ok(post)
    }

    /// Create a post for the acting user, binding the author lazily.
    pub async fn create(&self, acting_user_id: Uuid, form: PostForm) -> Result<Post> {
        let bound = form.validate_and_bind(None).map_err(AppError::Validation)?;
        let author = author_repo::get_or_create(&self.pool, acting_user_id).await?;
        let post = post_repo::insert(&self.pool, author.id, &bound).await?;

        tracing::info!(post_id = %post.id, author_id = %author.id, "post created");
        Ok(post)
    }

    /// Edit a post; requires ownership.
    pub async fn edit(&self, post_id: Uuid, acting_user_id: Uuid, form: PostForm) -> Result<Post> {
        let existing = self.load_for_modify(post_id, acting_user_id).await?;
        let bound = form
            .validate_and_bind(Some(&existing))
            .map_err(AppError::Validation)?;

        post_repo::update(&self.pool, post_id, &bound)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found.".to_string()))
    }

    /// Delete a post; requires ownership. Comments cascade in the database.
    pub async fn delete(&self, post_id: Uuid, acting_user_id: Uuid) -> Result<()> {
        self.load_for_modify(post_id, acting_user_id).await?;
        post_repo::delete(&self.pool, post_id).await?;

        tracing::info!(%post_id, "post deleted");
        Ok(())
    }

    /// One page of the acting user's own posts, published or not.
    pub async fn my_posts(
        &self,
        acting_user_id: Uuid,
        requested: PageRequest,
    ) -> Result<Page<Post>> {
        let author = author_repo::get_or_create(&self.pool, acting_user_id).await?;
        let total = post_repo::count_by_author(&self.pool, author.id).await?;
        let pager = Pager::new(total, DEFAULT_PAGE_SIZE);
        let number = pager.resolve(requested);
        let items = post_repo::list_by_author(
            &self.pool,
            author.id,
            pager.page_size(),
            pager.offset(number),
        )
        .await?;

        Ok(Page::new(items, number, DEFAULT_PAGE_SIZE, total))
    }
}
