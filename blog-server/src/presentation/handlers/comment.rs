use crate::application::comment_service::CommentService;
use crate::domain::error::DomainError;
use crate::presentation::utils::parse_id;
use actix_web::{HttpResponse, get, web};

#[get("/comments/{id}")]
pub async fn get_comment(
    comments: web::Data<CommentService>,
    path: web::Path<String>,
) -> Result<HttpResponse, DomainError> {
    let comment_id = parse_id(&path, "Comment")?;
    let comment = comments.get_comment(comment_id).await?;
    Ok(HttpResponse::Ok().json(comment))
}
