use crate::presentation::dto::HealthResponse;
use actix_web::{HttpResponse, Responder, get};
use chrono::Utc;

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
    })
}
