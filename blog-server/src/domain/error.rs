use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Post not found")]
    PostNotFound(Uuid),
    #[error("Category not found")]
    CategoryNotFound(Uuid),
    #[error("Comment not found")]
    CommentNotFound(Uuid),
    #[error("Cast to UUID failed for value \"{value}\" at path \"{path}\" for model \"{model}\"")]
    InvalidId {
        model: &'static str,
        path: &'static str,
        value: String,
    },
    #[error("{0}")]
    Validation(String),
    #[error("post {post_id} was deleted but its comments could not be removed: {reason}")]
    CascadeIncomplete {
        post_id: Uuid,
        orphaned: Vec<Uuid>,
        reason: String,
    },
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        match self {
            DomainError::PostNotFound(_)
            | DomainError::CategoryNotFound(_)
            | DomainError::CommentNotFound(_) => StatusCode::NOT_FOUND,
            DomainError::InvalidId { .. }
            | DomainError::Validation(_)
            | DomainError::CascadeIncomplete { .. }
            | DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = self.to_string();
        let details = match self {
            DomainError::CascadeIncomplete {
                post_id, orphaned, ..
            } => Some(json!({ "post": post_id, "orphanedComments": orphaned })),
            _ => None,
        };
        let body = ErrorBody {
            message: message.as_str(),
            details,
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_of(err: DomainError) -> serde_json::Value {
        let bytes = to_bytes(err.error_response().into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn not_found_has_plain_message_body() {
        let err = DomainError::PostNotFound(Uuid::new_v4());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(body_of(err).await, json!({ "message": "Post not found" }));
    }

    #[actix_web::test]
    async fn internal_passes_underlying_message_through() {
        let err = DomainError::Internal("connection refused".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(err).await, json!({ "message": "connection refused" }));
    }

    #[actix_web::test]
    async fn cascade_incomplete_lists_orphans() {
        let post_id = Uuid::new_v4();
        let orphan = Uuid::new_v4();
        let err = DomainError::CascadeIncomplete {
            post_id,
            orphaned: vec![orphan],
            reason: "timeout".into(),
        };

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(err).await;
        assert_eq!(body["details"]["post"], post_id.to_string());
        assert_eq!(body["details"]["orphanedComments"][0], orphan.to_string());
    }
}
