//! Process-local repositories.
//!
//! Used when no database is configured and by the test suites. Each collection
//! keeps insertion order so list results match the PostgreSQL backend, which
//! orders by creation time.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::data::category_repository::CategoryRepository;
use crate::data::comment_repository::CommentRepository;
use crate::data::post_repository::PostRepository;
use crate::domain::category::Category;
use crate::domain::comment::Comment;
use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostChanges};

#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: RwLock<Vec<Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn create(&self, category: Category) -> Result<Category, DomainError> {
        self.categories.write().await.push(category.clone());
        info!(category_id = %category.id, "category created");
        Ok(category)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, DomainError> {
        let categories = self.categories.read().await;
        Ok(categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Category>, DomainError> {
        let categories = self.categories.read().await;
        Ok(categories
            .iter()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect())
    }

    async fn list(&self) -> Result<Vec<Category>, DomainError> {
        Ok(self.categories.read().await.clone())
    }
}

#[derive(Default)]
pub struct InMemoryCommentRepository {
    comments: RwLock<Vec<Comment>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.comments.read().await.is_empty()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn create(&self, comment: Comment) -> Result<Comment, DomainError> {
        self.comments.write().await.push(comment.clone());
        info!(comment_id = %comment.id, "comment created");
        Ok(comment)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, DomainError> {
        let comments = self.comments.read().await;
        Ok(comments.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Comment>, DomainError> {
        let comments = self.comments.read().await;
        Ok(comments
            .iter()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect())
    }

    async fn delete_many(&self, ids: &[Uuid]) -> Result<u64, DomainError> {
        let mut comments = self.comments.write().await;
        let before = comments.len();
        comments.retain(|c| !ids.contains(&c.id));
        let deleted = (before - comments.len()) as u64;

        info!(count = deleted, "comments deleted");
        Ok(deleted)
    }
}

#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: Post) -> Result<Post, DomainError> {
        self.posts.write().await.push(post.clone());
        info!(post_id = %post.id, category_id = %post.category, "post created");
        Ok(post)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.read().await.clone())
    }

    async fn list_by_category(&self, category: Uuid) -> Result<Vec<Post>, DomainError> {
        let posts = self.posts.read().await;
        Ok(posts
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Option<Post>, DomainError> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        post.apply(changes);
        info!(post_id = %id, "post updated");
        Ok(Some(post.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        let mut posts = self.posts.write().await;
        let Some(index) = posts.iter().position(|p| p.id == id) else {
            return Ok(None);
        };

        let post = posts.remove(index);
        info!(post_id = %id, "post deleted");
        Ok(Some(post))
    }

    async fn push_comment(
        &self,
        id: Uuid,
        comment_id: Uuid,
    ) -> Result<Option<Post>, DomainError> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        post.comments.push(comment_id);
        post.updated_at = chrono::Utc::now();
        Ok(Some(post.clone()))
    }
}
