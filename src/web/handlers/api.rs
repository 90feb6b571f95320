use actix_web::{get, web, HttpResponse, Responder};

use crate::web::state::AppState;

#[get("/api/catalog")]
pub async fn catalog(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(&state.catalog)
}

#[get("/api/collections/{id}")]
pub async fn collection(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    match state.catalog.collection(&path) {
        Some(collection) => HttpResponse::Ok().json(collection),
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("collection {:?} not found", path.as_str()),
        })),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(catalog).service(collection);
}
