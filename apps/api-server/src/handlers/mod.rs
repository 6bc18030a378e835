//! HTTP handlers and route configuration.

mod health;
mod payload;
mod posts;

use actix_web::error::{JsonPayloadError, UrlencodedError};
use actix_web::{HttpRequest, HttpResponse, web};

use crate::middleware::error::{AppError, AppResult};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(form_config())
        .route("/", web::get().to(health::root))
        .route("/health", web::get().to(health::health_check))
        // Posts resource
        .service(
            web::scope("/posts")
                .service(
                    web::resource(["", "/"])
                        .route(web::get().to(posts::list))
                        .route(web::post().to(posts::create))
                        .default_service(web::to(method_not_allowed)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(posts::get_by_id))
                        .route(web::put().to(posts::update))
                        .route(web::delete().to(posts::remove))
                        .default_service(web::to(method_not_allowed)),
                ),
        )
        .default_service(web::to(not_found));
}

/// Largest accepted request body, JSON or form.
const BODY_LIMIT: usize = 256 * 1024;

const TOO_LARGE: &str = "request body is too large";

/// JSON bodies are accepted without a content type; parse failures become
/// `{"message": ...}` errors instead of actix's plain-text ones.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(BODY_LIMIT)
        .content_type_required(false)
        .error_handler(|err, _req: &HttpRequest| {
            tracing::warn!(error = %err, "Rejected request body");
            match err {
                JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                    AppError::PayloadTooLarge(TOO_LARGE.to_string()).into()
                }
                _ => AppError::BadRequest("request body must be valid JSON".to_string()).into(),
            }
        })
}

fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .limit(BODY_LIMIT)
        .error_handler(|err, _req: &HttpRequest| {
            tracing::warn!(error = %err, "Rejected form body");
            match err {
                UrlencodedError::Overflow { .. } => {
                    AppError::PayloadTooLarge(TOO_LARGE.to_string()).into()
                }
                _ => AppError::BadRequest("request body must be valid form data".to_string())
                    .into(),
            }
        })
}

async fn not_found() -> AppResult<HttpResponse> {
    Err(AppError::NotFound("Not Found".to_string()))
}

async fn method_not_allowed() -> AppResult<HttpResponse> {
    Err(AppError::MethodNotAllowed)
}
