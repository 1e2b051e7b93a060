use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;

use super::coords::parse_coordinates;
use super::models::{CoordinatePreview, LocationPayload, LocationQuery, LocationResponse, PreviewQuery};
use super::proximity::filter_catalog;
use super::store::CatalogStore;

pub(super) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health)
        .service(list_locations)
        .service(get_location)
        .service(create_location)
        .service(update_location)
        .service(delete_location)
        .service(preview_coordinates);
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({"ok": true}))
}

#[get("/locations")]
async fn list_locations(
    store: web::Data<CatalogStore>,
    q: web::Query<LocationQuery>,
) -> impl Responder {
    let filtered = filter_catalog(store.snapshot(), q.state.as_deref(), q.search.as_deref());
    let body: Vec<LocationResponse> = filtered.into_iter().map(LocationResponse::from).collect();
    HttpResponse::Ok().json(body)
}

#[get("/locations/{id}")]
async fn get_location(store: web::Data<CatalogStore>, path: web::Path<u64>) -> impl Responder {
    match store.get(path.into_inner()) {
        Some(location) => HttpResponse::Ok().json(LocationResponse::from(location)),
        None => HttpResponse::NotFound().body("location not found"),
    }
}

#[post("/locations")]
async fn create_location(
    store: web::Data<CatalogStore>,
    payload: web::Json<LocationPayload>,
) -> impl Responder {
    let new = match payload.into_inner().validate() {
        Ok(new) => new,
        Err(reason) => return HttpResponse::BadRequest().body(reason),
    };
    let created = store.insert(new);
    HttpResponse::Created().json(LocationResponse::from(created))
}

#[put("/locations/{id}")]
async fn update_location(
    store: web::Data<CatalogStore>,
    path: web::Path<u64>,
    payload: web::Json<LocationPayload>,
) -> impl Responder {
    let new = match payload.into_inner().validate() {
        Ok(new) => new,
        Err(reason) => return HttpResponse::BadRequest().body(reason),
    };
    match store.update(path.into_inner(), new) {
        Some(updated) => HttpResponse::Ok().json(LocationResponse::from(updated)),
        None => HttpResponse::NotFound().body("location not found"),
    }
}

#[delete("/locations/{id}")]
async fn delete_location(store: web::Data<CatalogStore>, path: web::Path<u64>) -> impl Responder {
    if store.remove(path.into_inner()) {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::NotFound().body("location not found")
    }
}

// Interpretation preview for the admin form's coordinate field.
#[get("/coordinates")]
async fn preview_coordinates(q: web::Query<PreviewQuery>) -> impl Responder {
    match parse_coordinates(&q.q) {
        Some(coords) => HttpResponse::Ok().json(CoordinatePreview::of(coords)),
        None => HttpResponse::BadRequest().body("invalid coordinate format"),
    }
}
