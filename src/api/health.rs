use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use crate::database::UserStore;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(store: web::Data<dyn UserStore>) -> impl Responder {
    let healthy = match store.ping().await {
        Ok(()) => true,
        Err(e) => {
            log::warn!("⚠️  Health check failed: {}", e);
            false
        }
    };

    let body = HealthResponse {
        status: if healthy { "healthy" } else { "unhealthy" }.to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    };

    if healthy {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::InMemoryUserStore;
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_health_reports_store_state() {
        for (store, expected, status) in [
            (InMemoryUserStore::new(), StatusCode::OK, "healthy"),
            (InMemoryUserStore::failing(), StatusCode::SERVICE_UNAVAILABLE, "unhealthy"),
        ] {
            let data: web::Data<dyn UserStore> = web::Data::from(Arc::new(store) as Arc<dyn UserStore>);
            let app = test::init_service(
                App::new().app_data(data).route("/health", web::get().to(health_check)),
            )
            .await;

            let req = test::TestRequest::get().uri("/health").to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected);

            let body: HealthResponse = test::read_body_json(resp).await;
            assert_eq!(body.status, status);
            assert_eq!(body.service, "users-service");
        }
    }
}
