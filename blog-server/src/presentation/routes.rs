use actix_web::{HttpRequest, error::JsonPayloadError, web};

use crate::domain::error::DomainError;
use crate::presentation::handlers;
use crate::state::AppState;

/// Registers the `/api` scope with its handlers and the shared services.
pub fn configure(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(state.posts))
            .app_data(web::Data::new(state.categories))
            .app_data(web::Data::new(state.comments))
            .app_data(web::JsonConfig::default().error_handler(json_error))
            .service(
                web::scope("/api")
                    .service(handlers::health::health)
                    .service(handlers::post::get_posts)
                    .service(handlers::post::create_post)
                    .service(handlers::post::get_posts_by_category)
                    .service(handlers::post::get_post)
                    .service(handlers::post::update_post)
                    .service(handlers::post::delete_post)
                    .service(handlers::post::create_post_comment)
                    .service(handlers::category::get_categories)
                    .service(handlers::category::create_category)
                    .service(handlers::category::get_category)
                    .service(handlers::comment::get_comment),
            );
    }
}

// Body rejections share the server-error surface with storage validation.
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    DomainError::Validation(err.to_string()).into()
}
