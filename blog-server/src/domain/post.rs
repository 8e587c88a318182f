use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::Category;
use crate::domain::comment::Comment;
use crate::domain::document::{Document, sanitize};

/// A post as stored: references are raw ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub category: Uuid,
    pub comments: Vec<Uuid>,
    #[serde(flatten)]
    pub fields: Document,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A post with its category and comments resolved to full records.
///
/// `category` is `None` when the referenced category no longer exists, and
/// comment ids that do not resolve are left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedPost {
    pub id: Uuid,
    pub category: Option<Category>,
    pub comments: Vec<Comment>,
    #[serde(flatten)]
    pub fields: Document,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub category: Uuid,
    pub comments: Vec<Uuid>,
    pub fields: Document,
}

/// Partial update: `None` keeps the stored value, present fields overwrite.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub category: Option<Uuid>,
    pub comments: Option<Vec<Uuid>>,
    pub fields: Document,
}

impl Post {
    pub fn new(new_post: NewPost) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            category: new_post.category,
            comments: new_post.comments,
            fields: sanitize(new_post.fields),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(category) = changes.category {
            self.category = category;
        }
        if let Some(comments) = changes.comments {
            self.comments = comments;
        }
        self.fields.extend(sanitize(changes.fields));
        self.updated_at = Utc::now();
    }

    pub fn populate(
        self,
        categories: &HashMap<Uuid, Category>,
        comments: &HashMap<Uuid, Comment>,
    ) -> PopulatedPost {
        PopulatedPost {
            id: self.id,
            category: categories.get(&self.category).cloned(),
            comments: self
                .comments
                .iter()
                .filter_map(|id| comments.get(id).cloned())
                .collect(),
            fields: self.fields,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
