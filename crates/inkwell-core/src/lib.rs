//! # Inkwell Core
//!
//! The domain layer of the Inkwell blog.
//! This crate contains the post model and the store port, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use domain::{NewPost, Post};
pub use error::RepoError;
