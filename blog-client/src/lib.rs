//! Typed HTTP client for the blog content service.

mod error;
mod http_client;
mod models;

pub use error::BlogClientError;
pub use http_client::BlogClient;
pub use models::{Category, Comment, PopulatedPost, Post};
