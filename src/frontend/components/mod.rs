//! Reusable card components for the WasteLoop frontend

mod collection;
mod footer;
mod image;
mod item_card;
mod nav;
mod view_all;

pub use collection::{item_action, CardCollection};
pub use footer::Footer;
pub use image::{fallback_onerror, ImageWithFallback, MediaPlaceholder, MediaState, FALLBACK_SRC};
pub use item_card::ItemCard;
pub use nav::Nav;
pub use view_all::{activate, ViewAllControl};
