use std::sync::Arc;

use crate::data::comment_repository::CommentRepository;
use crate::domain::{comment::Comment, error::DomainError};
use uuid::Uuid;

#[derive(Clone)]
pub struct CommentService {
    repo: Arc<dyn CommentRepository>,
}

impl CommentService {
    pub fn new(repo: Arc<dyn CommentRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_comment(&self, id: Uuid) -> Result<Comment, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CommentNotFound(id))
    }
}
