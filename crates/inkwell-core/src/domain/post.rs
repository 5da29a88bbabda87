use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a persisted blog entry.
///
/// `id` and `created_at` are assigned by the store and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// The fields a caller supplies when creating a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Name of the first empty required field, if any.
    ///
    /// Stores use this to enforce the same rule as the `posts` table's
    /// check constraints.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.title.is_empty() {
            Some("title")
        } else if self.content.is_empty() {
            Some("content")
        } else {
            None
        }
    }

    /// Materialize a post with a generated id, stamped now.
    pub fn into_post(self) -> Post {
        Post {
            id: Uuid::new_v4(),
            title: self.title,
            content: self.content,
            created_at: Utc::now(),
        }
    }
}
