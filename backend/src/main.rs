mod config;
mod db;
mod importer;
mod services;

use crate::config::Config;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();
    db::init_db(&config.database_path)
        .map_err(|e| std::io::Error::other(format!("database init failed: {}", e)))?;

    let bind = (config.host.clone(), config.port);
    info!("Server running at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
            .app_data(web::Data::new(config.clone()))
            .service(services::templates::configure_routes())
            .service(services::data_sources::csv::configure_routes())
            .service(services::campaigns::configure_routes())
    })
    .bind(bind)?
    .run()
    .await
}
