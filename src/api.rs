mod coords;
mod handlers;
mod models;
mod proximity;
mod store;

use actix_web::web;

pub use store::{seed_from_file, CatalogStore};

pub fn configure(cfg: &mut web::ServiceConfig) {
    handlers::configure(cfg);
}
