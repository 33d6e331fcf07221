/// Business logic layer
///
/// Services compose validation, authorization, and repository calls. Each
/// handler owns a short-lived service over the shared pool; there is no
/// other in-process state.
pub mod authors;
pub mod comments;
pub mod posts;

pub use authors::AuthorService;
pub use comments::CommentService;
pub use posts::PostService;
