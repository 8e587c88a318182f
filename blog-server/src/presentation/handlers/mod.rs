pub mod category;
pub mod comment;
pub mod health;
pub mod post;
