//! Placeholder data shipped with the app, used when no catalog file is configured

use crate::types::{CardVariant, CollectionLayout, CollectionSpec, DisplayRecord, Media};

pub(super) fn collections() -> Vec<CollectionSpec> {
    vec![
        hero_stats(),
        impact_metrics(),
        esg_metrics(),
        badges(),
        products(),
        suggestions(),
    ]
}

fn hero_stats() -> CollectionSpec {
    CollectionSpec {
        id: "hero-stats".into(),
        title: "Our community so far".into(),
        variant: CardVariant::HeroStat,
        layout: CollectionLayout::Row,
        records: vec![
            DisplayRecord::new("Food waste diverted")
                .with_media(Media::icon("🥕"))
                .with_value_text("2.4t"),
            DisplayRecord::new("Products created")
                .with_media(Media::icon("🫙"))
                .with_value_text("18"),
            DisplayRecord::new("CO₂e avoided")
                .with_media(Media::icon("🌍"))
                .with_value_text("5.1t"),
        ],
    }
}

fn impact_metrics() -> CollectionSpec {
    CollectionSpec {
        id: "impact".into(),
        title: "Your impact".into(),
        variant: CardVariant::ImpactMetric,
        layout: CollectionLayout::Grid { columns: 2 },
        records: vec![
            DisplayRecord::new("Waste diverted")
                .with_media(Media::icon("♻️"))
                .with_value_text("12kg"),
            DisplayRecord::new("Water saved")
                .with_media(Media::icon("💧"))
                .with_value_text("340L"),
            DisplayRecord::new("CO₂ avoided")
                .with_media(Media::icon("🌱"))
                .with_value_text("8.2kg"),
            DisplayRecord::new("Meals created")
                .with_media(Media::icon("🍲"))
                .with_value_text("46"),
        ],
    }
}

fn esg_metrics() -> CollectionSpec {
    CollectionSpec {
        id: "esg".into(),
        title: "ESG snapshot".into(),
        variant: CardVariant::EsgMetric,
        layout: CollectionLayout::Row,
        records: vec![
            DisplayRecord::new("Environmental")
                .with_media(Media::icon("🌿"))
                .with_secondary_text("Landfill diversion and emissions")
                .with_value_text("A"),
            DisplayRecord::new("Social")
                .with_media(Media::icon("🤝"))
                .with_secondary_text("Meals shared with local food banks")
                .with_value_text("B+"),
            DisplayRecord::new("Governance")
                .with_media(Media::icon("📋"))
                .with_secondary_text("Traceable sourcing for every batch")
                .with_value_text("A-"),
        ],
    }
}

fn badges() -> CollectionSpec {
    CollectionSpec {
        id: "badges".into(),
        title: "Achievements".into(),
        variant: CardVariant::Badge,
        layout: CollectionLayout::Strip,
        records: vec![
            DisplayRecord::new("First Upcycle")
                .with_media(Media::icon("🏅"))
                .with_secondary_text("Turned your first scraps into something new")
                .with_achieved(true),
            DisplayRecord::new("Zero Waste Week")
                .with_media(Media::icon("🗓️"))
                .with_secondary_text("Seven days without binning food")
                .with_achieved(true),
            DisplayRecord::new("Compost Champion")
                .with_media(Media::icon("🪱"))
                .with_secondary_text("Compost 50kg of leftovers")
                .with_achieved(false),
            DisplayRecord::new("Community Chef")
                .with_media(Media::icon("👩‍🍳"))
                .with_secondary_text("Share ten upcycled recipes")
                .with_achieved(false),
        ],
    }
}

fn products() -> CollectionSpec {
    CollectionSpec {
        id: "products".into(),
        title: "Upcycled marketplace".into(),
        variant: CardVariant::Product,
        layout: CollectionLayout::Grid { columns: 2 },
        records: vec![
            DisplayRecord::new("Citrus Peel Candy")
                .with_media(Media::image("/static/img/citrus-peel-candy.svg"))
                .with_secondary_text("Candied orange and lemon peel from juice bars")
                .with_value_text("$3.99")
                .with_action_label("Add to basket"),
            DisplayRecord::new("Spent Grain Crackers")
                .with_media(Media::image("/static/img/spent-grain-crackers.svg"))
                .with_secondary_text("Baked from brewery mash")
                .with_value_text("$4.49")
                .with_action_label("Add to basket"),
            DisplayRecord::new("Coffee Ground Scrub")
                .with_media(Media::image("/static/img/coffee-scrub.svg"))
                .with_secondary_text("Exfoliating scrub from café leftovers")
                .with_value_text("$6.50")
                .with_action_label("Add to basket"),
            DisplayRecord::new("Banana Peel Chutney")
                .with_media(Media::image("/static/img/banana-peel-chutney.svg"))
                .with_value_text("$5.25")
                .with_action_label("Add to basket"),
        ],
    }
}

fn suggestions() -> CollectionSpec {
    CollectionSpec {
        id: "suggestions".into(),
        title: "AI suggestions for your leftovers".into(),
        variant: CardVariant::Suggestion,
        layout: CollectionLayout::Strip,
        records: vec![
            DisplayRecord::new("Coffee Grounds → Antioxidant Oil")
                .with_media(Media::image("/static/img/coffee-oil.svg"))
                .with_secondary_text("Infuse used grounds in olive oil for a week, then strain")
                .with_action_label("Try recipe"),
            DisplayRecord::new("Fish Bones → Collagen Jelly")
                .with_media(Media::image("/static/img/collagen-jelly.svg"))
                .with_secondary_text("Simmer bones slowly and set the stock overnight")
                .with_action_label("Try recipe"),
            DisplayRecord::new("Stale Bread → Kvass")
                .with_media(Media::image("/static/img/kvass.svg"))
                .with_secondary_text("Ferment toasted rye with water, sugar and a little yeast")
                .with_action_label("Try recipe"),
        ],
    }
}
