pub mod api;
pub mod pages;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    pages::configure(cfg);
    api::configure(cfg);
}
