/// HTTP request handlers
///
/// One handler per user-facing operation. Handlers produce either a
/// rendered context (a `{ template, context }` payload for the external
/// rendering layer) or a redirect (303 See Other after a successful
/// mutation). Validation failures redisplay the form context with the
/// submitted input preserved, as 422.
pub mod comments;
pub mod posts;
pub mod profile;

pub use comments::submit_comment;
pub use posts::{
    confirm_delete_post, create_post, delete_post, edit_post, edit_post_form, list_posts,
    my_posts, new_post_form, post_detail,
};
pub use profile::{show_profile, update_profile};

use actix_web::http::header;
use actix_web::HttpResponse;

use crate::models::forms::FieldErrors;

/// A rendered page: template identifier plus context mapping. The render
/// step itself happens outside this service.
pub(crate) fn render(template: &str, context: serde_json::Value) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "template": template,
        "context": context,
    }))
}

/// Redisplay a form after validation failed: same template, submitted
/// values preserved, errors attached.
pub(crate) fn redisplay(
    template: &str,
    mut context: serde_json::Value,
    errors: FieldErrors,
) -> HttpResponse {
    if let Some(map) = context.as_object_mut() {
        map.insert(
            "errors".to_string(),
            serde_json::to_value(&errors).unwrap_or_default(),
        );
    }
    HttpResponse::UnprocessableEntity().json(serde_json::json!({
        "template": template,
        "context": context,
    }))
}

/// Client-side redirect after a successful mutation.
pub(crate) fn see_other(location: String) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub(crate) fn post_detail_location(post_id: uuid::Uuid) -> String {
    format!("/api/v1/posts/{}", post_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_see_other_sets_location() {
        let response = see_other("/api/v1/posts".to_string());
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/api/v1/posts"
        );
    }

    #[test]
    fn test_render_is_ok() {
        let response = render("blog/post_list", serde_json::json!({ "posts": [] }));
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_redisplay_is_unprocessable() {
        let mut errors = FieldErrors::default();
        errors.add("title", "Title is required.");

        let response = redisplay(
            "blog/post_form",
            serde_json::json!({ "form": { "title": "" } }),
            errors,
        );
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_post_detail_location_shape() {
        let id = uuid::Uuid::new_v4();
        assert_eq!(post_detail_location(id), format!("/api/v1/posts/{}", id));
    }
}
