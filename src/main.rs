use actix_web::{middleware::Logger, web, App, HttpServer};
use sportroops_api::config::{EnvConfig, CONFIG};
use sportroops_api::db::db_service::DbService;
use sportroops_api::routes::configure_routes;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = CONFIG.get_or_init(EnvConfig::from_env);
    let addr = format!("0.0.0.0:{}", config.port);

    let db_service = Arc::new(
        DbService::new(&config.db_url)
            .await
            .map_err(std::io::Error::other)?,
    );

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&db_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
