/// Profile handlers - view and edit the acting user's author record
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::error::{AppError, Result};
use crate::handlers::{redisplay, render, see_other};
use crate::middleware::CurrentUser;
use crate::models::forms::AuthorForm;
use crate::services::AuthorService;

/// Display the profile, creating the author record on first access
pub async fn show_profile(pool: web::Data<PgPool>, user: CurrentUser) -> Result<HttpResponse> {
    let service = AuthorService::new((**pool).clone());
    let author = service.profile(user.0).await?;

    let form = serde_json::json!({
        "bio": author.bio.clone(),
        "profile_picture": author.profile_picture.clone(),
    });

    Ok(render(
        "blog/profile",
        serde_json::json!({ "author": author, "form": form }),
    ))
}

/// Apply a profile update
pub async fn update_profile(
    pool: web::Data<PgPool>,
    user: CurrentUser,
    form: web::Form<AuthorForm>,
) -> Result<HttpResponse> {
    let service = AuthorService::new((**pool).clone());
    let submitted = form.into_inner();

    match service.update_profile(user.0, submitted.clone()).await {
        Ok(_) => Ok(see_other("/api/v1/profile".to_string())),
        Err(AppError::Validation(errors)) => Ok(redisplay(
            "blog/profile",
            serde_json::json!({ "form": submitted }),
            errors,
        )),
        Err(err) => Err(err),
    }
}
