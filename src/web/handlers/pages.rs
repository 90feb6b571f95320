use actix_web::http::StatusCode;
use actix_web::{get, web, HttpResponse, Responder};

use wasteloop::frontend;

use crate::web::helpers::{render, render_with_status};
use crate::web::state::AppState;
use crate::web::templates::LayoutTemplate;

#[get("/")]
pub async fn home(state: web::Data<AppState>) -> impl Responder {
    render(LayoutTemplate {
        title: "WasteLoop".to_string(),
        body: frontend::render_home(&state.catalog),
    })
}

#[get("/collections/{id}")]
pub async fn collection(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();

    match state.catalog.collection(&id) {
        Some(collection) => render(LayoutTemplate {
            title: format!("{} · WasteLoop", collection.title),
            body: frontend::render_collection(collection),
        }),
        None => {
            log::debug!("Unknown collection requested: {}", id);
            not_found_page()
        }
    }
}

/// Default service for any unmatched route
pub async fn not_found() -> HttpResponse {
    not_found_page()
}

fn not_found_page() -> HttpResponse {
    render_with_status(
        StatusCode::NOT_FOUND,
        LayoutTemplate {
            title: "Not found · WasteLoop".to_string(),
            body: frontend::render_not_found(),
        },
    )
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home).service(collection);
}
