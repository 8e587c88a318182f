pub mod category;
pub mod comment;
pub mod document;
pub mod error;
pub mod post;
