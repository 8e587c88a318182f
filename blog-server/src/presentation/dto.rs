use crate::domain::document::Document;
use crate::domain::post::{NewPost, PostChanges};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ======================= POSTS =======================

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub category: Uuid,
    #[serde(default)]
    pub comments: Vec<Uuid>,
    #[serde(flatten)]
    pub fields: Document,
}

impl From<CreatePostRequest> for NewPost {
    fn from(req: CreatePostRequest) -> Self {
        Self {
            category: req.category,
            comments: req.comments,
            fields: req.fields,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub category: Option<Uuid>,
    #[serde(default)]
    pub comments: Option<Vec<Uuid>>,
    #[serde(flatten)]
    pub fields: Document,
}

impl From<UpdatePostRequest> for PostChanges {
    fn from(req: UpdatePostRequest) -> Self {
        Self {
            category: req.category,
            comments: req.comments,
            fields: req.fields,
        }
    }
}

// ===================== CATEGORIES ====================

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub name: String,
}

// ======================= Utils =======================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_request_collects_extra_fields() {
        let category = Uuid::new_v4();
        let req: CreatePostRequest = serde_json::from_value(json!({
            "title": "Hi",
            "category": category,
            "tags": ["a", "b"],
        }))
        .unwrap();

        assert_eq!(req.category, category);
        assert!(req.comments.is_empty());
        assert_eq!(req.fields.len(), 2);
        assert_eq!(req.fields["tags"], json!(["a", "b"]));
    }

    #[test]
    fn create_request_requires_category() {
        let result = serde_json::from_value::<CreatePostRequest>(json!({ "title": "Hi" }));
        assert!(result.is_err());
    }

    #[test]
    fn update_request_may_be_empty() {
        let req: UpdatePostRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.category.is_none());
        assert!(req.comments.is_none());
        assert!(req.fields.is_empty());
    }
}
