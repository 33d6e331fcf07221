/// Ownership-based authorization
///
/// A post may only be mutated by the user who owns its author record. The
/// check is a pure predicate over the post's joined `author_user_id`;
/// callers that reach it have already established the post exists, which is
/// what keeps Forbidden distinct from NotFound.
use uuid::Uuid;

use crate::error::AppError;
use crate::models::Post;

/// True iff the acting user owns the post's author record.
pub fn can_modify(post: &Post, acting_user_id: Uuid) -> bool {
    post.author_user_id == acting_user_id
}

/// Check that a user may edit or delete a post.
pub fn check_post_ownership(acting_user_id: Uuid, post: &Post) -> Result<(), AppError> {
    if can_modify(post, acting_user_id) {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "You don't have permission to modify this post.".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn post_owned_by(user_id: Uuid) -> Post {
        Post {
            id: Uuid::new_v4(),
            title: "A post".to_string(),
            content: "Body".to_string(),
            author_id: Uuid::new_v4(),
            author_user_id: user_id,
            image: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            published: true,
        }
    }

    #[test]
    fn test_owner_can_modify() {
        let owner = Uuid::new_v4();
        let post = post_owned_by(owner);

        assert!(can_modify(&post, owner));
        assert!(check_post_ownership(owner, &post).is_ok());
    }

    #[test]
    fn test_non_owner_is_forbidden() {
        let post = post_owned_by(Uuid::new_v4());
        let stranger = Uuid::new_v4();

        assert!(!can_modify(&post, stranger));
        let err = check_post_ownership(stranger, &post).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }
}
