use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::document::{Document, sanitize};

/// A comment stores whatever body the client sent, next to the managed fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    #[serde(flatten)]
    pub body: Document,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(body: Document) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            body: sanitize(body),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn body_is_flattened_next_to_id() {
        let mut body = Document::new();
        body.insert("text".into(), json!("nice"));
        body.insert("id".into(), json!("client-chosen"));

        let comment = Comment::new(body);
        let json = serde_json::to_value(&comment).unwrap();

        assert_eq!(json["text"], "nice");
        assert_eq!(json["id"], comment.id.to_string());
    }
}
