//! # Inkwell Blog Client
//!
//! The client side of the blog: talks to the API, keeps the post list and
//! the create form as local state, and renders them as a page.

pub mod api;
pub mod app;
pub mod error;
pub mod view;

pub use api::{HttpPostsApi, PostsApi};
pub use app::{BlogApp, PostForm};
pub use error::ClientError;
