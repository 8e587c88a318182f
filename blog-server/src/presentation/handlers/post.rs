use crate::application::post_service::PostService;
use crate::domain::document::Document;
use crate::domain::error::DomainError;
use crate::presentation::dto::{CreatePostRequest, UpdatePostRequest};
use crate::presentation::utils::{parse_id, parse_reference, request_id};
use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use tracing::info;

#[get("/posts")]
pub async fn get_posts(
    req: HttpRequest,
    posts: web::Data<PostService>,
) -> Result<HttpResponse, DomainError> {
    let posts = posts.get_posts().await?;

    info!(
        request_id = %request_id(&req),
        total = posts.len(),
        "posts retrieved"
    );

    Ok(HttpResponse::Ok().json(posts))
}

#[get("/posts/category/{category}")]
pub async fn get_posts_by_category(
    req: HttpRequest,
    posts: web::Data<PostService>,
    path: web::Path<String>,
) -> Result<HttpResponse, DomainError> {
    let category = parse_reference(&path, "Post", "category")?;
    let posts = posts.get_posts_by_category(category).await?;

    info!(
        request_id = %request_id(&req),
        category_id = %category,
        total = posts.len(),
        "posts by category retrieved"
    );

    Ok(HttpResponse::Ok().json(posts))
}

#[get("/posts/{id}")]
pub async fn get_post(
    posts: web::Data<PostService>,
    path: web::Path<String>,
) -> Result<HttpResponse, DomainError> {
    let post_id = parse_id(&path, "Post")?;
    let post = posts.get_post(post_id).await?;

    Ok(HttpResponse::Ok().json(post))
}

#[post("/posts")]
pub async fn create_post(
    req: HttpRequest,
    posts: web::Data<PostService>,
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, DomainError> {
    let post = posts.create_post(payload.into_inner().into()).await?;

    info!(
        request_id = %request_id(&req),
        post_id = %post.id,
        "post created"
    );

    Ok(HttpResponse::Created().json(post))
}

#[put("/posts/{id}")]
pub async fn update_post(
    req: HttpRequest,
    posts: web::Data<PostService>,
    path: web::Path<String>,
    payload: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse, DomainError> {
    let post_id = parse_id(&path, "Post")?;
    let post = posts
        .update_post(post_id, payload.into_inner().into())
        .await?;

    info!(
        request_id = %request_id(&req),
        post_id = %post.id,
        "post updated"
    );

    Ok(HttpResponse::Ok().json(post))
}

#[delete("/posts/{id}")]
pub async fn delete_post(
    req: HttpRequest,
    posts: web::Data<PostService>,
    path: web::Path<String>,
) -> Result<HttpResponse, DomainError> {
    let post_id = parse_id(&path, "Post")?;
    let post = posts.delete_post(post_id).await?;

    info!(
        request_id = %request_id(&req),
        post_id = %post.id,
        comments = post.comments.len(),
        "post deleted"
    );

    Ok(HttpResponse::Ok().json(post))
}

#[post("/posts/{id}/comments")]
pub async fn create_post_comment(
    req: HttpRequest,
    posts: web::Data<PostService>,
    path: web::Path<String>,
    payload: web::Bytes,
) -> Result<HttpResponse, DomainError> {
    let post_id = parse_id(&path, "Post")?;
    let body = comment_body(&payload)?;
    let comment = posts.create_comment(post_id, body).await?;

    info!(
        request_id = %request_id(&req),
        post_id = %post_id,
        comment_id = %comment.id,
        "comment added"
    );

    Ok(HttpResponse::Created().json(comment))
}

/// A missing body creates an empty comment; anything else must be a JSON object.
fn comment_body(payload: &[u8]) -> Result<Document, DomainError> {
    if payload.iter().all(u8::is_ascii_whitespace) {
        return Ok(Document::new());
    }
    serde_json::from_slice(payload)
        .map_err(|e| DomainError::Validation(format!("Comment validation failed: {e}")))
}
