mod web;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};

use wasteloop::catalog::Catalog;
use wasteloop::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        std::io::Error::other(e)
    })?;

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path).map_err(|e| {
            log::error!("Failed to load catalog {}: {}", path.display(), e);
            std::io::Error::other(e)
        })?,
        None => {
            log::info!("CATALOG_PATH not set, serving the built-in catalog");
            Catalog::builtin()
        }
    };

    let state = Data::new(web::AppState { catalog });
    let static_dir = config.static_dir.clone();

    log::info!("WasteLoop listening on {}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(web::handlers::configure)
            .service(Files::new("/static", static_dir.clone()).prefer_utf8(true))
            .default_service(actix_web::web::to(web::handlers::pages::not_found))
    })
    .bind(config.bind_addr)?
    .run()
    .await
}
