//! Post handlers - thin mapping between HTTP and the post store.

use actix_web::{HttpResponse, web};

use inkwell_core::{NewPost, Post};
use inkwell_shared::{CreatePostRequest, PostResponse};

use crate::middleware::error::AppResult;
use crate::observability::RequestId;
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        created_at: post.created_at,
    }
}

/// GET /api/posts
pub async fn list_posts(
    state: web::Data<AppState>,
    request_id: RequestId,
) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await.inspect_err(|e| {
        tracing::error!(request_id = %request_id, error = %e, "Failed to list posts");
    })?;

    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/posts
///
/// No checks here: whatever the store refuses comes back as a 500.
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = state
        .posts
        .create(NewPost::new(req.title, req.content))
        .await
        .inspect_err(|e| {
            tracing::error!(request_id = %request_id, error = %e, "Failed to create post");
        })?;

    tracing::info!(request_id = %request_id, post_id = %post.id, "Post created");
    Ok(HttpResponse::Created().json(to_response(post)))
}
