use leptos::callback::Callback;
use leptos::prelude::*;

use super::image::{ImageWithFallback, MediaPlaceholder};
use super::view_all::activate;
use crate::types::{CardVariant, DisplayRecord, Media};

fn achieved_class(achieved: Option<bool>) -> &'static str {
    match achieved {
        Some(true) => " item-card--achieved",
        Some(false) => " item-card--locked",
        None => "",
    }
}

/// One card: media, title, then whichever optional fields the record carries
#[component]
pub fn ItemCard(
    record: DisplayRecord,
    #[prop(optional)] variant: CardVariant,
    /// Position in the parent collection
    #[prop(optional)]
    index: usize,
    #[prop(optional_no_strip, into)] on_action: Option<Callback<()>>,
) -> impl IntoView {
    let DisplayRecord {
        media,
        primary_label,
        secondary_text,
        value_text,
        achieved,
        action_label,
    } = record;

    let classes = format!(
        "item-card {}{}",
        variant.card_class(),
        achieved_class(achieved)
    );

    let media_view = match media {
        Some(Media::Image { src }) => view! {
            <ImageWithFallback src=src alt=primary_label.clone() class="item-card-image" />
        }
        .into_any(),
        Some(Media::Icon { symbol }) => view! {
            <span class="item-card-icon" aria-hidden="true">{symbol}</span>
        }
        .into_any(),
        None => view! { <MediaPlaceholder label=primary_label.clone() /> }.into_any(),
    };

    view! {
        <article class=classes data-index=index.to_string()>
            <div class="item-card-media">{media_view}</div>
            <div class="item-card-body">
                <h3 class="item-card-title">{primary_label}</h3>
                {secondary_text.map(|text| view! { <p class="item-card-text">{text}</p> })}
                {value_text.map(|value| view! { <span class="item-card-value">{value}</span> })}
                {achieved.map(|done| view! {
                    <span class="item-card-status">{if done { "Unlocked" } else { "Locked" }}</span>
                })}
                {action_label.map(|label| view! {
                    <button
                        type="button"
                        class="item-card-action"
                        on:click=move |_| activate(on_action.as_ref())
                    >
                        {label}
                    </button>
                })}
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(record: DisplayRecord, variant: CardVariant) -> String {
        Owner::new().with(|| view! { <ItemCard record=record variant=variant /> }.to_html())
    }

    #[test]
    fn test_optional_fields_absent_render_nothing() {
        let html = render(DisplayRecord::new("Apple Cores → Vinegar"), CardVariant::Suggestion);
        assert!(html.contains("Apple Cores → Vinegar"));
        assert!(!html.contains("item-card-text"));
        assert!(!html.contains("item-card-value"));
        assert!(!html.contains("item-card-action"));
        assert!(!html.contains("item-card-status"));
    }

    #[test]
    fn test_missing_media_renders_placeholder() {
        let html = render(DisplayRecord::new("Onion Skins → Dye"), CardVariant::Suggestion);
        assert!(html.contains("media-fallback"));
    }

    #[test]
    fn test_product_card_renders_value_and_action() {
        let record = DisplayRecord::new("Spent Grain Crackers")
            .with_value_text("$4.49")
            .with_action_label("Add to basket");
        let html = render(record, CardVariant::Product);
        assert!(html.contains("item-card--product"));
        assert!(html.contains("$4.49"));
        assert!(html.contains("Add to basket"));
    }

    #[test]
    fn test_badge_achieved_flag_selects_modifier() {
        let unlocked = render(
            DisplayRecord::new("First Upcycle").with_achieved(true),
            CardVariant::Badge,
        );
        assert!(unlocked.contains("item-card--achieved"));
        assert!(unlocked.contains("Unlocked"));

        let locked = render(
            DisplayRecord::new("Compost Champion").with_achieved(false),
            CardVariant::Badge,
        );
        assert!(locked.contains("item-card--locked"));
        assert!(!locked.contains("item-card--achieved"));
    }

    #[test]
    fn test_icon_media_renders_symbol() {
        let record = DisplayRecord::new("Water saved").with_media(Media::icon("💧"));
        let html = render(record, CardVariant::ImpactMetric);
        assert!(html.contains("💧"));
        assert!(!html.contains("media-fallback"));
    }
}
