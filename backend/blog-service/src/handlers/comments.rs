/// Comment handlers - submitting a comment on a post's detail view
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::handlers::{post_detail_location, redisplay, see_other};
use crate::middleware::MaybeUser;
use crate::models::forms::CommentForm;
use crate::services::{CommentService, PostService};

/// Submit a comment on a published post.
///
/// Success redirects back to the detail view (post/redirect/get); a replayed
/// POST will create a duplicate comment, which matches the upstream policy
/// of leaving resubmission guarding to the client. Validation failures
/// redisplay the detail context with the submitted content preserved.
pub async fn submit_comment(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user: MaybeUser,
    form: web::Form<CommentForm>,
) -> Result<HttpResponse> {
    let comments = CommentService::new((**pool).clone());
    let submitted = form.into_inner();

    match comments.add_comment(*post_id, user.0, submitted.clone()).await {
        Ok(comment) => Ok(see_other(post_detail_location(comment.post_id))),
        Err(AppError::Validation(errors)) => {
            let posts = PostService::new((**pool).clone());
            let post = posts.get_published(*post_id).await?;
            let thread = comments.visible_for_post(post.id).await?;

            Ok(redisplay(
                "blog/post_detail",
                serde_json::json!({
                    "post": post,
                    "comments": thread,
                    "form": submitted,
                }),
                errors,
            ))
        }
        Err(err) => Err(err),
    }
}
