/// Database access layer
///
/// Repository functions over PostgreSQL. Post queries join the authors
/// table so every `Post` row carries its owner's `user_id`; visibility
/// filters (`published`, `approved`) live in the SQL itself.
pub mod author_repo;
pub mod comment_repo;
pub mod post_repo;
