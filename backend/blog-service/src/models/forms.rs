/// Input validation layer
///
/// Form types map submitted fields onto validated, not-yet-persisted values.
/// Inputs are trimmed before validation, so whitespace-only input counts as
/// empty. On failure the caller gets `FieldErrors` (field name to
/// human-readable messages) and no side effects have happened.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::models::{Author, Post};

/// Field name to human-readable error messages, ordered for stable output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::default();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                match &error.message {
                    Some(message) => out.add(field, message),
                    None => out.add(field, &format!("Invalid value for {}.", field)),
                }
            }
        }
        out
    }
}

/// Trims an optional submitted value; empty submissions count as absent.
fn submitted(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Submitted fields for creating or editing a post.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PostForm {
    #[validate(length(min = 1, max = 200, message = "Title is required and must be at most 200 characters."))]
    pub title: String,
    #[validate(length(min = 1, message = "Content is required."))]
    pub content: String,
    /// Stable reference path returned by the external file store.
    pub image: Option<String>,
    /// Omitted on edit keeps the stored value; omitted on create means
    /// published.
    pub published: Option<bool>,
}

/// A validated post, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundPost {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub published: bool,
}

impl PostForm {
    /// Validates the submitted fields and binds them against an optional
    /// existing post (edit semantics: an omitted image keeps the stored one).
    pub fn validate_and_bind(mut self, existing: Option<&Post>) -> Result<BoundPost, FieldErrors> {
        self.title = self.title.trim().to_string();
        self.content = self.content.trim().to_string();
        self.validate().map_err(FieldErrors::from)?;

        let image = submitted(self.image)
            .or_else(|| existing.and_then(|post| post.image.clone()));
        let published = self
            .published
            .or_else(|| existing.map(|post| post.published))
            .unwrap_or(true);

        Ok(BoundPost {
            title: self.title,
            content: self.content,
            image,
            published,
        })
    }
}

/// Submitted fields for commenting on a post.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CommentForm {
    #[validate(length(min = 1, message = "Comment content is required."))]
    pub content: String,
}

/// A validated comment body, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundComment {
    pub content: String,
}

impl CommentForm {
    pub fn validate_and_bind(mut self) -> Result<BoundComment, FieldErrors> {
        self.content = self.content.trim().to_string();
        self.validate().map_err(FieldErrors::from)?;

        Ok(BoundComment {
            content: self.content,
        })
    }
}

/// Submitted fields for the author profile; both are optional.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AuthorForm {
    #[validate(length(max = 500, message = "Bio must be at most 500 characters."))]
    pub bio: Option<String>,
    /// Stable reference path returned by the external file store.
    pub profile_picture: Option<String>,
}

/// A validated profile update, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundAuthor {
    pub bio: String,
    pub profile_picture: Option<String>,
}

impl AuthorForm {
    /// Binds against the existing author: omitted fields keep their stored
    /// values, a submitted empty bio clears it.
    pub fn validate_and_bind(mut self, existing: &Author) -> Result<BoundAuthor, FieldErrors> {
        self.bio = self.bio.map(|b| b.trim().to_string());
        self.validate().map_err(FieldErrors::from)?;

        let bio = self.bio.unwrap_or_else(|| existing.bio.clone());
        let profile_picture =
            submitted(self.profile_picture).or_else(|| existing.profile_picture.clone());

        Ok(BoundAuthor {
            bio,
            profile_picture,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_post() -> Post {
        Post {
            id: Uuid::new_v4(),
            title: "First post".to_string(),
            content: "Hello".to_string(),
            author_id: Uuid::new_v4(),
            author_user_id: Uuid::new_v4(),
            image: Some("posts/existing.jpg".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            published: true,
        }
    }

    fn sample_author() -> Author {
        Author {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            bio: "Old bio".to_string(),
            profile_picture: Some("authors/old.png".to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_post_form_rejects_empty_title() {
        let form = PostForm {
            title: "".to_string(),
            content: "Body".to_string(),
            image: None,
            published: Some(true),
        };

        let errors = form.validate_and_bind(None).unwrap_err();
        assert!(errors.contains("title"));
        assert_eq!(errors.messages("title").len(), 1);
        assert!(!errors.contains("content"));
    }

    #[test]
    fn test_post_form_rejects_whitespace_only_content() {
        let form = PostForm {
            title: "A title".to_string(),
            content: "   \n\t ".to_string(),
            image: None,
            published: Some(true),
        };

        let errors = form.validate_and_bind(None).unwrap_err();
        assert!(errors.contains("content"));
    }

    #[test]
    fn test_post_form_rejects_overlong_title() {
        let form = PostForm {
            title: "x".repeat(201),
            content: "Body".to_string(),
            image: None,
            published: Some(true),
        };

        let errors = form.validate_and_bind(None).unwrap_err();
        assert!(errors.contains("title"));
    }

    #[test]
    fn test_post_form_binds_trimmed_values() {
        let form = PostForm {
            title: "  A title  ".to_string(),
            content: " Body \n".to_string(),
            image: Some("posts/new.jpg".to_string()),
            published: Some(false),
        };

        let bound = form.validate_and_bind(None).unwrap();
        assert_eq!(bound.title, "A title");
        assert_eq!(bound.content, "Body");
        assert_eq!(bound.image.as_deref(), Some("posts/new.jpg"));
        assert!(!bound.published);
    }

    #[test]
    fn test_post_form_keeps_existing_image_when_omitted() {
        let existing = sample_post();
        let form = PostForm {
            title: "Edited".to_string(),
            content: "Edited body".to_string(),
            image: None,
            published: Some(true),
        };

        let bound = form.validate_and_bind(Some(&existing)).unwrap();
        assert_eq!(bound.image.as_deref(), Some("posts/existing.jpg"));
    }

    #[test]
    fn test_post_form_keeps_existing_published_when_omitted() {
        // An edit submission without the published field must not flip a
        // draft back to published.
        let mut draft = sample_post();
        draft.published = false;

        let form = PostForm {
            title: "Edited".to_string(),
            content: "Edited body".to_string(),
            image: None,
            published: None,
        };

        let bound = form.validate_and_bind(Some(&draft)).unwrap();
        assert!(!bound.published);
    }

    #[test]
    fn test_post_form_defaults_to_published_on_create() {
        let form = PostForm {
            title: "Fresh".to_string(),
            content: "Body".to_string(),
            image: None,
            published: None,
        };

        let bound = form.validate_and_bind(None).unwrap();
        assert!(bound.published);
    }

    #[test]
    fn test_comment_form_requires_content() {
        let form = CommentForm {
            content: "  ".to_string(),
        };

        let errors = form.validate_and_bind().unwrap_err();
        assert!(errors.contains("content"));
        assert_eq!(errors.messages("content"), ["Comment content is required."]);
    }

    #[test]
    fn test_comment_form_binds_trimmed_content() {
        let form = CommentForm {
            content: " nice post ".to_string(),
        };

        let bound = form.validate_and_bind().unwrap();
        assert_eq!(bound.content, "nice post");
    }

    #[test]
    fn test_author_form_rejects_overlong_bio() {
        let form = AuthorForm {
            bio: Some("x".repeat(501)),
            profile_picture: None,
        };

        let errors = form.validate_and_bind(&sample_author()).unwrap_err();
        assert!(errors.contains("bio"));
    }

    #[test]
    fn test_author_form_keeps_existing_fields_when_omitted() {
        let existing = sample_author();
        let form = AuthorForm {
            bio: None,
            profile_picture: None,
        };

        let bound = form.validate_and_bind(&existing).unwrap();
        assert_eq!(bound.bio, "Old bio");
        assert_eq!(bound.profile_picture.as_deref(), Some("authors/old.png"));
    }

    #[test]
    fn test_author_form_clears_bio_on_empty_submission() {
        let form = AuthorForm {
            bio: Some("  ".to_string()),
            profile_picture: Some("authors/new.png".to_string()),
        };

        let bound = form.validate_and_bind(&sample_author()).unwrap();
        assert_eq!(bound.bio, "");
        assert_eq!(bound.profile_picture.as_deref(), Some("authors/new.png"));
    }
}
