//! Full view of a single collection, the destination of "view all"

use leptos::prelude::*;

use crate::frontend::components::{CardCollection, Footer, Nav};
use crate::types::{CollectionLayout, CollectionSpec};

#[component]
pub fn CollectionPage(collection: CollectionSpec) -> impl IntoView {
    let layout = CollectionLayout::Grid { columns: 2 };

    view! {
        <div class="page page-collection">
            <Nav/>
            <main class="page-main">
                <a href="/" class="back-link">"← Back home"</a>
                <CardCollection
                    records=collection.records
                    variant=collection.variant
                    layout=layout
                    title=collection.title
                    hide_view_all=true
                />
            </main>
            <Footer/>
        </div>
    }
}
