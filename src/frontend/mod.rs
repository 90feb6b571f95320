//! Leptos components and the server-side entry points that render them to HTML

pub mod components;
pub mod pages;

use leptos::prelude::*;

use crate::catalog::Catalog;
use crate::types::CollectionSpec;
use pages::{CollectionPage, HomePage, NotFound};

/// Render the home page body for every collection in `catalog`
pub fn render_home(catalog: &Catalog) -> String {
    let catalog = catalog.clone();
    Owner::new().with(move || view! { <HomePage catalog=catalog /> }.to_html())
}

pub fn render_collection(collection: &CollectionSpec) -> String {
    let collection = collection.clone();
    Owner::new().with(move || view! { <CollectionPage collection=collection /> }.to_html())
}

pub fn render_not_found() -> String {
    Owner::new().with(|| view! { <NotFound/> }.to_html())
}
