use leptos::callback::{Callable, Callback};
use leptos::prelude::*;

use super::item_card::ItemCard;
use super::view_all::ViewAllControl;
use crate::types::{CardVariant, CollectionLayout, DisplayRecord};

/// Per-card action hook: forwards the card's position to the collection hook
pub fn item_action(hook: Option<&Callback<usize>>, index: usize) -> Option<Callback<()>> {
    hook.map(|hook| {
        let hook = hook.clone();
        Callback::new(move |_: ()| hook.run(index))
    })
}

/// Lays out one [`ItemCard`] per record, in the order given.
///
/// Cards are keyed by their position, so records never need an id of their own.
/// An empty `records` list still produces the container.
#[component]
pub fn CardCollection(
    records: Vec<DisplayRecord>,
    #[prop(optional)] variant: CardVariant,
    #[prop(optional)] layout: CollectionLayout,
    #[prop(optional, into)] title: Option<String>,
    /// Called with no arguments each time "view all" is activated
    #[prop(optional_no_strip, into)]
    on_view_all: Option<Callback<()>>,
    /// Called with the record's position when its action button is pressed
    #[prop(optional_no_strip, into)]
    on_item_action: Option<Callback<usize>>,
    /// Where "view all" navigates to; without it the control is a button
    #[prop(optional_no_strip, into)]
    view_all_href: Option<String>,
    #[prop(optional)] hide_view_all: bool,
) -> impl IntoView {
    let has_header = title.is_some() || !hide_view_all;

    view! {
        <section class="card-section" data-variant=variant.as_str()>
            {has_header.then(|| view! {
                <header class="card-section-header">
                    {title.map(|t| view! { <h2 class="card-section-title">{t}</h2> })}
                    {(!hide_view_all).then(|| view! { <ViewAllControl on_view_all=on_view_all href=view_all_href /> })}
                </header>
            })}
            <div class=layout.container_class()>
                <For
                    each=move || records.clone().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=move |(index, record)| {
                        let on_action = item_action(on_item_action.as_ref(), index);
                        view! {
                            <ItemCard record=record variant=variant index=index on_action=on_action />
                        }
                    }
                />
            </div>
        </section>
    }
}
