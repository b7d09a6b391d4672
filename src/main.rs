mod api;
mod config;
mod database;
mod middleware;
mod models;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::database::{MongoDB, UserStore};

fn build_cors(allowed_origins: &[String]) -> Cors {
    if allowed_origins.is_empty() {
        return Cors::permissive();
    }

    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            actix_web::http::header::CONTENT_TYPE,
            actix_web::http::header::ACCEPT,
        ])
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env()
        .inspect_err(|e| log::error!("❌ Invalid configuration: {}", e))?;

    log::info!("🚀 Starting Users Service...");
    log::info!("📊 Database: {}", config.mongodb_uri);

    // Falha de conexão na inicialização encerra o processo
    let db = MongoDB::new(&config)
        .await
        .inspect_err(|e| log::error!("❌ Failed to connect to MongoDB: {}", e))?;

    let store: web::Data<dyn UserStore> = web::Data::from(Arc::new(db) as Arc<dyn UserStore>);

    log::info!("✅ MongoDB connected successfully");

    let (host, port) = config.bind_address();
    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    let openapi = api::swagger::ApiDoc::openapi();
    let cors_origins = config.cors_allowed_origins.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .wrap(build_cors(&cors_origins))
            .wrap(middleware::RequestMetrics)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(api::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
