mod api;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into());
    let store = web::Data::new(api::CatalogStore::new());

    if let Ok(path) = std::env::var("CATALOG_SEED") {
        let inserted = api::seed_from_file(&store, &path)?;
        log::info!("Seeded {inserted} locations from {path}");
    }

    log::info!("Catalog server starting on {bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .app_data(store.clone())
            .configure(api::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
