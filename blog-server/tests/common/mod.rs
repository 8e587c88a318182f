#![allow(dead_code)]

use async_trait::async_trait;
use blog_server::data::comment_repository::CommentRepository;
use blog_server::data::post_repository::PostRepository;
use blog_server::domain::comment::Comment;
use blog_server::domain::error::DomainError;
use blog_server::domain::post::{Post, PostChanges};
use uuid::Uuid;

/// Builds the full `/api` app around the given [`blog_server::state::AppState`].
macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(blog_server::presentation::middleware::RequestContext)
                .configure(blog_server::presentation::routes::configure($state)),
        )
        .await
    };
}

/// Comment store that accepts writes but fails every batch delete.
pub struct FailingDeleteComments;

#[async_trait]
impl CommentRepository for FailingDeleteComments {
    async fn create(&self, comment: Comment) -> Result<Comment, DomainError> {
        Ok(comment)
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Comment>, DomainError> {
        Ok(None)
    }

    async fn find_by_ids(&self, _ids: &[Uuid]) -> Result<Vec<Comment>, DomainError> {
        Ok(Vec::new())
    }

    async fn delete_many(&self, _ids: &[Uuid]) -> Result<u64, DomainError> {
        Err(DomainError::Internal("connection reset by peer".into()))
    }
}

/// Post store whose every call fails as an unreachable database would.
pub struct UnavailablePosts;

pub const UNAVAILABLE: &str = "pool timed out while waiting for an open connection";

fn unavailable() -> DomainError {
    DomainError::Internal(UNAVAILABLE.into())
}

#[async_trait]
impl PostRepository for UnavailablePosts {
    async fn create(&self, _post: Post) -> Result<Post, DomainError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Post>, DomainError> {
        Err(unavailable())
    }

    async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Err(unavailable())
    }

    async fn list_by_category(&self, _category: Uuid) -> Result<Vec<Post>, DomainError> {
        Err(unavailable())
    }

    async fn update(&self, _id: Uuid, _changes: PostChanges) -> Result<Option<Post>, DomainError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: Uuid) -> Result<Option<Post>, DomainError> {
        Err(unavailable())
    }

    async fn push_comment(
        &self,
        _id: Uuid,
        _comment_id: Uuid,
    ) -> Result<Option<Post>, DomainError> {
        Err(unavailable())
    }
}
