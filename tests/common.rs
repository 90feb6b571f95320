#![allow(dead_code)]

use std::path::PathBuf;

use leptos::prelude::*;

use wasteloop::frontend::components::CardCollection;
use wasteloop::types::*;

pub const TITLE_OPEN: &str = "<h3 class=\"item-card-title\">";

pub fn coffee_grounds() -> DisplayRecord {
    DisplayRecord::new("Coffee Grounds → Antioxidant Oil")
}

pub fn fish_bones() -> DisplayRecord {
    DisplayRecord::new("Fish Bones → Collagen Jelly")
}

pub fn citrus_peel_candy() -> DisplayRecord {
    DisplayRecord::new("Citrus Peel Candy")
        .with_media(Media::image("https://unreachable.invalid/citrus.jpg"))
        .with_secondary_text("Candied peel from juice bars")
        .with_value_text("$3.99")
        .with_action_label("Add to basket")
}

pub fn numbered_records(n: usize) -> Vec<DisplayRecord> {
    (0..n)
        .map(|i| DisplayRecord::new(format!("Scrap batch #{i}")).with_value_text(format!("{i}kg")))
        .collect()
}

pub fn render_collection(records: Vec<DisplayRecord>, variant: CardVariant) -> String {
    Owner::new().with(|| {
        view! { <CardCollection records=records variant=variant /> }
            .to_html()
    })
}

/// Titles in the order they appear in the markup
pub fn card_titles(html: &str) -> Vec<String> {
    html.split(TITLE_OPEN)
        .skip(1)
        .filter_map(|rest| rest.split("</h3>").next())
        .map(str::to_string)
        .collect()
}

pub fn card_count(html: &str) -> usize {
    html.matches("<article class=\"item-card ").count()
}

pub fn example_catalog_path() -> String {
    format!("{}/catalog.example.json", env!("CARGO_MANIFEST_DIR"))
}

/// Maps a `/static/...` URL to the file the server would serve for it
pub fn static_asset_path(url: &str) -> Option<PathBuf> {
    url.strip_prefix("/static/")
        .map(|rest| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static").join(rest))
}
