use actix_web::{HttpMessage, HttpRequest};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::presentation::middleware::RequestId;

/// Parses a path id; a malformed value is a failed lookup, not a missing entity.
pub fn parse_id(raw: &str, model: &'static str) -> Result<Uuid, DomainError> {
    parse_reference(raw, model, "id")
}

pub fn parse_reference(
    raw: &str,
    model: &'static str,
    path: &'static str,
) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|_| DomainError::InvalidId {
        model,
        path,
        value: raw.to_string(),
    })
}

pub fn request_id(req: &HttpRequest) -> String {
    req.extensions()
        .get::<RequestId>()
        .map(|rid| rid.0.clone())
        .unwrap_or_else(|| "unknown".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_id_names_model_and_value() {
        let err = parse_id("abc", "Post").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cast to UUID failed for value \"abc\" at path \"id\" for model \"Post\""
        );
    }

    #[test]
    fn malformed_reference_names_the_field() {
        let err = parse_reference("nope", "Post", "category").unwrap_err();
        assert!(err.to_string().contains("at path \"category\""));
    }

    #[test]
    fn valid_id_parses() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string(), "Post").unwrap(), id);
    }
}
