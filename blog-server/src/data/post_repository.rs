use crate::domain::document::{Document, sanitize};
use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostChanges};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;
use tracing::{error, info};
use uuid::Uuid;

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, post: Post) -> Result<Post, DomainError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError>;
    async fn list(&self) -> Result<Vec<Post>, DomainError>;
    async fn list_by_category(&self, category: Uuid) -> Result<Vec<Post>, DomainError>;
    /// Returns the post as stored after the update, or `None` if it does not exist.
    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Option<Post>, DomainError>;
    /// Returns the removed post, or `None` if it did not exist.
    async fn delete(&self, id: Uuid) -> Result<Option<Post>, DomainError>;
    /// Appends `comment_id` to the post's comment list in a single write.
    async fn push_comment(&self, id: Uuid, comment_id: Uuid)
    -> Result<Option<Post>, DomainError>;
}

#[derive(Clone)]
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    category_id: Uuid,
    comment_ids: Vec<Uuid>,
    body: Json<Document>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id,
            category: row.category_id,
            comments: row.comment_ids,
            fields: row.body.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const POST_COLUMNS: &str = "id, category_id, comment_ids, body, created_at, updated_at";

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: Post) -> Result<Post, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, category_id, comment_ids, body, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(post.id)
        .bind(post.category)
        .bind(&post.comments)
        .bind(Json(&post.fields))
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to create post: {}", e);
            DomainError::Internal(e.to_string())
        })?;

        info!(post_id = %post.id, category_id = %post.category, "post created");
        Ok(post)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("db error find_by_id {}: {}", id, e);
            DomainError::Internal(e.to_string())
        })?;

        Ok(row.map(Post::from))
    }

    async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts ORDER BY created_at"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("db error while fetching posts: {}", e);
            DomainError::Internal(e.to_string())
        })?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn list_by_category(&self, category: Uuid) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE category_id = $1 ORDER BY created_at"
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("db error while fetching posts of category {}: {}", category, e);
            DomainError::Internal(e.to_string())
        })?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Option<Post>, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            r#"
            UPDATE posts
            SET
                category_id = COALESCE($1, category_id),
                comment_ids = COALESCE($2, comment_ids),
                body = body || $3,
                updated_at = $4
            WHERE id = $5
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(changes.category)
        .bind(changes.comments)
        .bind(Json(sanitize(changes.fields)))
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to update post {}: {}", id, e);
            DomainError::Internal(e.to_string())
        })?;

        if row.is_some() {
            info!(post_id = %id, "post updated");
        }

        Ok(row.map(Post::from))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "DELETE FROM posts WHERE id = $1 RETURNING {POST_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to delete post {}: {}", id, e);
            DomainError::Internal(e.to_string())
        })?;

        if row.is_some() {
            info!(post_id = %id, "post deleted");
        }

        Ok(row.map(Post::from))
    }

    async fn push_comment(
        &self,
        id: Uuid,
        comment_id: Uuid,
    ) -> Result<Option<Post>, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            r#"
            UPDATE posts
            SET comment_ids = array_append(comment_ids, $1), updated_at = $2
            WHERE id = $3
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(comment_id)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to append comment {} to post {}: {}", comment_id, id, e);
            DomainError::Internal(e.to_string())
        })?;

        Ok(row.map(Post::from))
    }
}
