use serde_json::{Map, Value};

/// Free-form JSON object carried by posts and comments.
pub type Document = Map<String, Value>;

/// Keys owned by the service; clients cannot set them through a document body.
const RESERVED_KEYS: [&str; 4] = ["id", "_id", "createdAt", "updatedAt"];

pub fn sanitize(mut doc: Document) -> Document {
    for key in RESERVED_KEYS {
        doc.remove(key);
    }
    doc
}
