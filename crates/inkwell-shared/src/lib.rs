//! # Inkwell Shared
//!
//! Wire types shared between the API server and the blog client.

pub mod dto;
pub mod response;

pub use dto::{CreatePostRequest, PostResponse};
pub use response::ErrorResponse;
