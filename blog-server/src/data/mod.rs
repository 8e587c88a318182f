pub mod category_repository;
pub mod comment_repository;
pub mod memory;
pub mod post_repository;
