/// Blog Service Library
///
/// Handles posts, comments, and author profile endpoints for the blog
/// platform. Content is listed, paginated, created, edited, and deleted
/// through HTTP routes; rendering, sessions, and file storage live behind
/// external boundaries.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers, one per user-facing operation
/// - `models`: Row types for authors, posts, comments plus form binding
/// - `services`: Business logic layer (ownership checks, get-or-create)
/// - `db`: Repository functions over PostgreSQL
/// - `pagination`: Fixed-size page windowing with clamp-to-first-page
/// - `middleware`: Acting-user extractors and request timing
/// - `error`: Error types and HTTP response mapping
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
