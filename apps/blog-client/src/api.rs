//! HTTP access to the posts API.

use std::time::Duration;

use async_trait::async_trait;
use inkwell_shared::{CreatePostRequest, ErrorResponse, PostResponse};
use reqwest::{Client, Response};

use crate::error::ClientError;

/// The two calls the client makes.
#[async_trait]
pub trait PostsApi: Send + Sync {
    async fn list_posts(&self) -> Result<Vec<PostResponse>, ClientError>;

    async fn create_post(&self, req: &CreatePostRequest) -> Result<PostResponse, ClientError>;
}

/// `PostsApi` over HTTP.
pub struct HttpPostsApi {
    client: Client,
    posts_url: String,
}

impl HttpPostsApi {
    /// `base_url` is the server root, e.g. `http://localhost:3001`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self {
            client,
            posts_url: format!("{}/api/posts", base_url.trim_end_matches('/')),
        })
    }
}

async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await?;
    let message = error_message(&body).unwrap_or(body);
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

/// The `error` field of an API error body.
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .map(|e| e.error)
}

#[async_trait]
impl PostsApi for HttpPostsApi {
    async fn list_posts(&self) -> Result<Vec<PostResponse>, ClientError> {
        let response = self.client.get(&self.posts_url).send().await?;
        let posts = check_status(response).await?.json().await?;
        Ok(posts)
    }

    async fn create_post(&self, req: &CreatePostRequest) -> Result<PostResponse, ClientError> {
        let response = self.client.post(&self.posts_url).json(req).send().await?;
        let post = check_status(response).await?.json().await?;
        Ok(post)
    }
}
