//! In-memory post store - used when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;

use inkwell_core::ports::PostRepository;
use inkwell_core::{NewPost, Post, RepoError};

/// Posts held in a `Vec` behind an async RwLock.
///
/// Applies the same non-empty rule as the `posts` table.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        if let Some(field) = new_post.missing_field() {
            return Err(RepoError::Constraint(format!("{field} must not be empty")));
        }

        let post = new_post.into_post();
        self.posts.write().await.push(post.clone());
        Ok(post)
    }
}
