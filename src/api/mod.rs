pub mod health;
pub mod metrics;
pub mod swagger;
pub mod users;

use actix_web::{error, web, HttpResponse, Responder};
use crate::utils::AppError;

/// GET / - Saudação
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain")
    )
)]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Hello, World!\n")
}

/// Registra as rotas e os extratores configurados.
///
/// O store precisa estar registrado como `web::Data<dyn UserStore>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| bad_request(err)))
        .app_data(web::FormConfig::default().error_handler(|err, _req| bad_request(err)))
        .app_data(web::QueryConfig::default().error_handler(|err, _req| bad_request(err)))
        .route("/", web::get().to(index))
        .route("/health", web::get().to(health::health_check))
        .route("/metrics", web::get().to(metrics::get_metrics))
        .service(
            web::scope("/users")
                .route("", web::post().to(users::create_user))
                .route("/{id}", web::get().to(users::get_user))
                .route("/{id}", web::put().to(users::update_user))
                .route("/{id}", web::delete().to(users::delete_user)),
        );
}

/// Erros de extração viram `AppError::InvalidRequest` (400, texto)
fn bad_request(err: impl std::fmt::Display) -> error::Error {
    AppError::InvalidRequest(err.to_string()).into()
}
