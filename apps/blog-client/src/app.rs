//! Client view state: the post list and the create form.

use inkwell_shared::{CreatePostRequest, PostResponse};

use crate::api::PostsApi;
use crate::error::ClientError;

/// Transient contents of the create form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
}

impl PostForm {
    /// Mirrors the `required` attribute: only a truly empty value is missing.
    fn missing_field(&self) -> Option<&'static str> {
        if self.title.is_empty() {
            Some("title")
        } else if self.content.is_empty() {
            Some("content")
        } else {
            None
        }
    }
}

/// The single-page blog view.
///
/// `posts` is a local copy of the server list and may be stale.
pub struct BlogApp<A> {
    api: A,
    posts: Vec<PostResponse>,
    form: PostForm,
    mounted: bool,
}

impl<A: PostsApi> BlogApp<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            posts: Vec::new(),
            form: PostForm::default(),
            mounted: false,
        }
    }

    pub fn posts(&self) -> &[PostResponse] {
        &self.posts
    }

    pub fn form(&self) -> &PostForm {
        &self.form
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.form.content = content.into();
    }

    /// Load the post list. Once a load has succeeded, later calls do nothing.
    ///
    /// On failure the list is left as it was and the next call retries.
    pub async fn mount(&mut self) -> Result<(), ClientError> {
        if self.mounted {
            return Ok(());
        }

        self.posts = self.api.list_posts().await?;
        self.mounted = true;
        tracing::debug!(count = self.posts.len(), "Posts loaded");
        Ok(())
    }

    /// Send the form. The post is appended and the form cleared only once
    /// the server has confirmed the create.
    pub async fn submit(&mut self) -> Result<PostResponse, ClientError> {
        if let Some(field) = self.form.missing_field() {
            return Err(ClientError::MissingField(field));
        }

        let req = CreatePostRequest {
            title: self.form.title.clone(),
            content: self.form.content.clone(),
        };
        let created = self.api.create_post(&req).await?;
        tracing::debug!(post_id = %created.id, "Post created");

        self.posts.push(created.clone());
        self.form = PostForm::default();
        Ok(created)
    }
}
