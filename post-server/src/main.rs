use dotenvy::dotenv;
use std::sync::Arc;

mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;

use application::PostService;
use data::{post_repository::PostgresPostRepository, user_repository::PostgresUserRepository};
use infrastructure::{
    config::{AppConfig, DEFAULT_LOG_FILTER},
    database::{create_pool, run_migrations},
    jwt::JwtService,
    logging::init_logging,
};
use presentation::graphql::{build_schema, AppSchema};
use presentation::http_handlers;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    init_logging(DEFAULT_LOG_FILTER);

    let config = AppConfig::from_env()?;

    tracing::info!("Starting post server...");
    tracing::info!("HTTP server will listen on {}", config.http_addr());
    tracing::info!("CORS allowed origins: {:?}", config.cors_allowed_origins);

    tracing::info!("Connecting to database...");
    let pool = create_pool(&config.database_url, config.database_max_connections).await?;

    tracing::info!("Running database migrations...");
    run_migrations(&pool).await?;

    let jwt_service = Arc::new(JwtService::new(&config.jwt_secret));

    let post_repo = Arc::new(PostgresPostRepository::new(pool.clone()));
    let user_repo = Arc::new(PostgresUserRepository::new(pool));
    let post_service = Arc::new(PostService::new(post_repo, user_repo));

    let schema = build_schema(post_service);

    tracing::info!("Services initialized successfully");

    run_http_server(config, schema, jwt_service).await?;

    tracing::info!("Shutting down...");
    Ok(())
}

/// Configure CORS for the HTTP server with allowed origins from .env
fn configure_cors(allowed_origins: &[String]) -> actix_cors::Cors {
    use actix_cors::Cors;
    use actix_web::http::header;

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600);

    for origin in allowed_origins {
        cors = cors.allowed_origin(origin);
        tracing::debug!("Added allowed CORS origin: {}", origin);
    }

    cors
}

async fn run_http_server(
    config: AppConfig,
    schema: AppSchema,
    jwt_service: Arc<JwtService>,
) -> anyhow::Result<()> {
    use actix_web::{middleware::Logger, web, App, HttpServer};

    let addr = config.http_addr();
    let cors_allowed_origins = config.cors_allowed_origins;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(configure_cors(&cors_allowed_origins))
            .app_data(web::Data::new(schema.clone()))
            .app_data(web::Data::new(jwt_service.clone()))
            .configure(http_handlers::configure)
    })
    .bind(&addr)?
    .run();

    tracing::info!("HTTP server running on {}", addr);

    server.await?;

    Ok(())
}
