//! Landing page: hero banner followed by every catalog collection

use leptos::callback::{Callable, Callback};
use leptos::prelude::*;

use crate::catalog::Catalog;
use crate::frontend::components::{CardCollection, Footer, Nav};

/// Hook for one section's "view all": reports the section's collection id
pub fn section_view_all(outer: Option<&Callback<String>>, id: &str) -> Option<Callback<()>> {
    outer.map(|outer| {
        let outer = outer.clone();
        let id = id.to_string();
        Callback::new(move |_: ()| outer.run(id.clone()))
    })
}

#[component]
pub fn HomePage(
    catalog: Catalog,
    /// Receives the id of the collection whose "view all" was activated
    #[prop(optional_no_strip, into)]
    on_view_all: Option<Callback<String>>,
) -> impl IntoView {
    let sections = catalog
        .collections()
        .iter()
        .cloned()
        .map(|collection| {
            let hook = section_view_all(on_view_all.as_ref(), &collection.id);
            let href = format!("/collections/{}", collection.id);

            view! {
                <CardCollection
                    records=collection.records
                    variant=collection.variant
                    layout=collection.layout
                    title=collection.title
                    on_view_all=hook
                    view_all_href=href
                />
            }
        })
        .collect_view();

    view! {
        <div class="page page-home">
            <Nav/>
            <section class="hero">
                <h1 class="hero-title">"Turn food waste into something worth keeping"</h1>
                <p class="hero-subtitle">
                    "Track what you save, unlock achievements and get ideas for every leftover."
                </p>
            </section>
            <main class="page-main">{sections}</main>
            <Footer/>
        </div>
    }
}
