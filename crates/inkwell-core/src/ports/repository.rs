use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;

/// Post store.
///
/// Posts are append-only: there is no update or delete.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts in insertion order (`created_at` ascending, then `id`).
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Insert a post and return it with its store-assigned `id` and `created_at`.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;
}
