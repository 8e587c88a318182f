use std::sync::Arc;

use crate::application::category_service::CategoryService;
use crate::application::comment_service::CommentService;
use crate::application::post_service::PostService;
use crate::data::category_repository::{CategoryRepository, PostgresCategoryRepository};
use crate::data::comment_repository::{CommentRepository, PostgresCommentRepository};
use crate::data::memory::{
    InMemoryCategoryRepository, InMemoryCommentRepository, InMemoryPostRepository,
};
use crate::data::post_repository::{PostRepository, PostgresPostRepository};
use sqlx::PgPool;

/// Services shared by every worker; all of them are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub categories: CategoryService,
    pub comments: CommentService,
}

impl AppState {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            posts: PostService::new(posts, Arc::clone(&comments), Arc::clone(&categories)),
            categories: CategoryService::new(categories),
            comments: CommentService::new(comments),
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PostgresPostRepository::new(pool.clone())),
            Arc::new(PostgresCommentRepository::new(pool.clone())),
            Arc::new(PostgresCategoryRepository::new(pool)),
        )
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(InMemoryCommentRepository::new()),
            Arc::new(InMemoryCategoryRepository::new()),
        )
    }
}
