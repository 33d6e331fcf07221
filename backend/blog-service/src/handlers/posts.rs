/// Post handlers - HTTP endpoints for listing, reading, and mutating posts
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::handlers::{post_detail_location, redisplay, render, see_other};
use crate::middleware::CurrentUser;
use crate::models::forms::PostForm;
use crate::models::Post;
use crate::pagination::PageRequest;
use crate::services::{CommentService, PostService};

/// Listing query parameters. `page` stays a raw string so that non-numeric
/// input can fall back to the first page instead of failing extraction.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
}

impl ListQuery {
    fn page_request(&self) -> PageRequest {
        PageRequest::from_param(self.page.as_deref())
    }
}

/// Display a page of published posts
pub async fn list_posts(
    pool: web::Data<PgPool>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let page = service.list_published(query.page_request()).await?;

    Ok(render("blog/post_list", serde_json::json!({ "page": page })))
}

/// Display a single published post with its approved comments and a blank
/// comment form
pub async fn post_detail(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let posts = PostService::new((**pool).clone());
    let comments = CommentService::new((**pool).clone());

    let post = posts.get_published(*post_id).await?;
    let thread = comments.visible_for_post(post.id).await?;

    Ok(render(
        "blog/post_detail",
        serde_json::json!({
            "post": post,
            "comments": thread,
            "form": { "content": "" },
        }),
    ))
}

/// Show a blank post form
pub async fn new_post_form(_user: CurrentUser) -> Result<HttpResponse> {
    Ok(render(
        "blog/post_form",
        serde_json::json!({
            "title": "Create New Post",
            "form": { "title": "", "content": "", "image": null, "published": true },
        }),
    ))
}

/// Create a new post
pub async fn create_post(
    pool: web::Data<PgPool>,
    user: CurrentUser,
    form: web::Form<PostForm>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let submitted = form.into_inner();

    match service.create(user.0, submitted.clone()).await {
        Ok(post) => Ok(see_other(post_detail_location(post.id))),
        Err(AppError::Validation(errors)) => Ok(redisplay(
            "blog/post_form",
            serde_json::json!({ "title": "Create New Post", "form": submitted }),
            errors,
        )),
        Err(err) => Err(err),
    }
}

/// Context for the edit form: the post being edited plus the form values to
/// show, for both the pre-filled GET and the 422 redisplay.
fn edit_form_context(post: Post, form: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "title": "Edit Post", "post": post, "form": form })
}

/// Show the edit form pre-filled with the post's current values
pub async fn edit_post_form(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user: CurrentUser,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let post = service.load_for_modify(*post_id, user.0).await?;

    let form = serde_json::json!({
        "title": post.title.clone(),
        "content": post.content.clone(),
        "image": post.image.clone(),
        "published": post.published,
    });

    Ok(render("blog/post_form", edit_form_context(post, form)))
}

/// Edit an existing post
pub async fn edit_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user: CurrentUser,
    form: web::Form<PostForm>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let submitted = form.into_inner();

    match service.edit(*post_id, user.0, submitted.clone()).await {
        Ok(post) => Ok(see_other(post_detail_location(post.id))),
        Err(AppError::Validation(errors)) => {
            // Validation only runs after the ownership check, so the post is
            // known to exist and belong to the actor.
            let post = service.load_for_modify(*post_id, user.0).await?;
            Ok(redisplay(
                "blog/post_form",
                edit_form_context(post, serde_json::json!(submitted)),
                errors,
            ))
        }
        Err(err) => Err(err),
    }
}

/// Show the delete confirmation prompt (no side effect)
pub async fn confirm_delete_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user: CurrentUser,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let post = service.load_for_modify(*post_id, user.0).await?;

    Ok(render(
        "blog/post_confirm_delete",
        serde_json::json!({ "post": post }),
    ))
}

/// Delete a post after confirmation
pub async fn delete_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user: CurrentUser,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    service.delete(*post_id, user.0).await?;

    Ok(see_other("/api/v1/posts".to_string()))
}

/// Display a page of the acting user's own posts, published or not
pub async fn my_posts(
    pool: web::Data<PgPool>,
    user: CurrentUser,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let page = service.my_posts(user.0, query.page_request()).await?;

    Ok(render("blog/my_posts", serde_json::json!({ "page": page })))
}
