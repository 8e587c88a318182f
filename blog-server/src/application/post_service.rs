use std::collections::HashMap;
use std::sync::Arc;

use crate::data::category_repository::CategoryRepository;
use crate::data::comment_repository::CommentRepository;
use crate::data::post_repository::PostRepository;
use crate::domain::comment::Comment;
use crate::domain::document::Document;
use crate::domain::error::DomainError;
use crate::domain::post::{NewPost, PopulatedPost, Post, PostChanges};
use tracing::{error, instrument, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl PostService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            posts,
            comments,
            categories,
        }
    }

    pub async fn get_posts(&self) -> Result<Vec<PopulatedPost>, DomainError> {
        let posts = self.posts.list().await?;
        self.populate(posts).await
    }

    pub async fn get_post(&self, id: Uuid) -> Result<PopulatedPost, DomainError> {
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PostNotFound(id))?;

        let mut populated = self.populate(vec![post]).await?;
        populated.pop().ok_or(DomainError::PostNotFound(id))
    }

    pub async fn get_posts_by_category(
        &self,
        category: Uuid,
    ) -> Result<Vec<PopulatedPost>, DomainError> {
        let posts = self.posts.list_by_category(category).await?;
        self.populate(posts).await
    }

    #[instrument(skip(self))]
    pub async fn create_post(&self, new_post: NewPost) -> Result<Post, DomainError> {
        self.posts.create(Post::new(new_post)).await
    }

    #[instrument(skip(self))]
    pub async fn update_post(&self, id: Uuid, changes: PostChanges) -> Result<Post, DomainError> {
        match self.posts.update(id, changes).await {
            Ok(Some(post)) => Ok(post),
            Ok(None) => Err(DomainError::PostNotFound(id)),
            Err(e) => Err(e),
        }
    }

    /// Deletes the post and then its comments.
    ///
    /// The post removal is not undone when the comment cleanup fails; that case
    /// is reported as [`DomainError::CascadeIncomplete`] carrying the comment
    /// ids left behind.
    #[instrument(skip(self))]
    pub async fn delete_post(&self, id: Uuid) -> Result<Post, DomainError> {
        let post = self
            .posts
            .delete(id)
            .await?
            .ok_or(DomainError::PostNotFound(id))?;

        if let Err(e) = self.comments.delete_many(&post.comments).await {
            error!(
                post_id = %post.id,
                orphaned = ?post.comments,
                "post deleted but comment cleanup failed: {}",
                e
            );
            return Err(DomainError::CascadeIncomplete {
                post_id: post.id,
                orphaned: post.comments,
                reason: e.to_string(),
            });
        }

        Ok(post)
    }

    #[instrument(skip(self, body))]
    pub async fn create_comment(
        &self,
        post_id: Uuid,
        body: Document,
    ) -> Result<Comment, DomainError> {
        self.posts
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;

        let comment = self.comments.create(Comment::new(body)).await?;

        let attached = match self.posts.push_comment(post_id, comment.id).await {
            Ok(attached) => attached,
            Err(e) => {
                error!(
                    post_id = %post_id,
                    comment_id = %comment.id,
                    "failed to attach comment, removing it: {}",
                    e
                );
                if let Err(cleanup) = self.comments.delete_many(&[comment.id]).await {
                    error!(
                        comment_id = %comment.id,
                        "comment left orphaned: {}",
                        cleanup
                    );
                }
                return Err(e);
            }
        };

        if attached.is_none() {
            warn!(
                post_id = %post_id,
                comment_id = %comment.id,
                "post vanished before comment was attached, removing comment"
            );
            self.comments.delete_many(&[comment.id]).await?;
            return Err(DomainError::PostNotFound(post_id));
        }

        Ok(comment)
    }

    async fn populate(&self, posts: Vec<Post>) -> Result<Vec<PopulatedPost>, DomainError> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let mut category_ids: Vec<Uuid> = posts.iter().map(|p| p.category).collect();
        category_ids.sort_unstable();
        category_ids.dedup();

        let mut comment_ids: Vec<Uuid> = posts
            .iter()
            .flat_map(|p| p.comments.iter().copied())
            .collect();
        comment_ids.sort_unstable();
        comment_ids.dedup();

        let categories: HashMap<_, _> = self
            .categories
            .find_by_ids(&category_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();
        let comments: HashMap<_, _> = self
            .comments
            .find_by_ids(&comment_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        Ok(posts
            .into_iter()
            .map(|post| post.populate(&categories, &comments))
            .collect())
    }
}
