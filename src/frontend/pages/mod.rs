//! Page components for the WasteLoop frontend

mod collection;
mod home;
mod not_found;

pub use collection::CollectionPage;
pub use home::{section_view_all, HomePage};
pub use not_found::NotFound;
