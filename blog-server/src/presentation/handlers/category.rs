use crate::application::category_service::CategoryService;
use crate::domain::error::DomainError;
use crate::presentation::dto::CreateCategoryRequest;
use crate::presentation::utils::{parse_id, request_id};
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use tracing::info;

#[get("/categories")]
pub async fn get_categories(
    categories: web::Data<CategoryService>,
) -> Result<HttpResponse, DomainError> {
    let categories = categories.get_categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}

#[get("/categories/{id}")]
pub async fn get_category(
    categories: web::Data<CategoryService>,
    path: web::Path<String>,
) -> Result<HttpResponse, DomainError> {
    let category_id = parse_id(&path, "Category")?;
    let category = categories.get_category(category_id).await?;
    Ok(HttpResponse::Ok().json(category))
}

#[post("/categories")]
pub async fn create_category(
    req: HttpRequest,
    categories: web::Data<CategoryService>,
    payload: web::Json<CreateCategoryRequest>,
) -> Result<HttpResponse, DomainError> {
    let category = categories
        .create_category(payload.into_inner().name)
        .await?;

    info!(
        request_id = %request_id(&req),
        category_id = %category.id,
        "category created"
    );

    Ok(HttpResponse::Created().json(category))
}
